/// Playlist domain types
use crate::types::{PlaylistId, SongId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Visibility settings for a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Only visible to accounts holding a library membership
    Private,
    /// Visible to anyone with the id (share link)
    Shared,
    /// Visible to all, including the unauthenticated public listing
    Public,
}

impl Visibility {
    /// Convert visibility to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "PRIVATE",
            Visibility::Shared => "SHARED",
            Visibility::Public => "PUBLIC",
        }
    }

    /// Parse visibility from its wire string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PRIVATE" => Some(Visibility::Private),
            "SHARED" => Some(Visibility::Shared),
            "PUBLIC" => Some(Visibility::Public),
            _ => None,
        }
    }
}

/// Sorting options for a playlist
///
/// `Custom` uses the stored membership order; the other modes are display
/// hints for clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sorting {
    /// User-defined custom order (the stored membership order)
    Custom,
    /// Sort songs alphabetically by title
    Title,
    /// Sort songs alphabetically by artist name
    Artist,
    /// Sort songs by recently added
    RecentlyAdded,
    /// Sort songs by release date
    ReleaseDate,
    /// Sort songs by duration
    Playtime,
    /// Sort songs alphabetically by album name
    Album,
}

impl Sorting {
    /// Convert sorting to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sorting::Custom => "CUSTOM",
            Sorting::Title => "TITLE",
            Sorting::Artist => "ARTIST",
            Sorting::RecentlyAdded => "RECENTLY_ADDED",
            Sorting::ReleaseDate => "RELEASE_DATE",
            Sorting::Playtime => "PLAYTIME",
            Sorting::Album => "ALBUM",
        }
    }

    /// Parse sorting from its wire string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CUSTOM" => Some(Sorting::Custom),
            "TITLE" => Some(Sorting::Title),
            "ARTIST" => Some(Sorting::Artist),
            "RECENTLY_ADDED" => Some(Sorting::RecentlyAdded),
            "RELEASE_DATE" => Some(Sorting::ReleaseDate),
            "PLAYTIME" => Some(Sorting::Playtime),
            "ALBUM" => Some(Sorting::Album),
            _ => None,
        }
    }
}

/// Song-in-playlist membership
///
/// Identity is `(playlist, song)`: a playlist holds at most one entry per
/// song id, and the entry's position is its index in the ordered list. The
/// add-date belongs to the membership, not the song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    /// The member song
    pub song_id: SongId,

    /// When the song was added to the playlist
    pub added_at: NaiveDateTime,
}

impl SongEntry {
    /// Create a new membership entry
    pub fn new(song_id: SongId, added_at: NaiveDateTime) -> Self {
        Self { song_id, added_at }
    }
}

/// Playlist aggregate: metadata plus the ordered song memberships
///
/// Library memberships live in the storage-level relationship table, not on
/// the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name (1-100 chars, restricted charset)
    pub name: String,

    /// Playlist description (0-250 chars, restricted charset)
    pub description: String,

    /// External cover image URL; an owned cover blob takes precedence
    pub cover_url: Option<String>,

    /// Visibility tier
    pub visibility: Visibility,

    /// Sorting mode
    pub sorting: Sorting,

    /// Ordered song memberships (the CUSTOM order)
    pub entries: Vec<SongEntry>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cover_url: Option<String>,
        visibility: Visibility,
        sorting: Sorting,
    ) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            description: description.into(),
            cover_url,
            visibility,
            sorting,
            entries: Vec::new(),
        }
    }

    /// Copy this playlist under a fresh identity
    ///
    /// The copy keeps name, description, external cover URL, visibility and
    /// sorting, and references the same songs with the original add-dates.
    /// It does not take over the owned cover blob.
    pub fn copy(&self) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: self.name.clone(),
            description: self.description.clone(),
            cover_url: self.cover_url.clone(),
            visibility: self.visibility,
            sorting: self.sorting,
            entries: self.entries.clone(),
        }
    }

    /// Number of member songs
    pub fn song_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the playlist already holds a membership for this song
    pub fn contains_song(&self, song_id: &SongId) -> bool {
        self.entries.iter().any(|e| &e.song_id == song_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: &str) -> SongEntry {
        SongEntry::new(
            SongId::new(id),
            NaiveDate::from_ymd_opt(2023, 7, 15)
                .unwrap()
                .and_hms_opt(0, 45, 0)
                .unwrap(),
        )
    }

    #[test]
    fn playlist_copy_gets_fresh_identity() {
        let mut playlist = Playlist::new(
            "Chill Vibes",
            "Relaxing tracks",
            None,
            Visibility::Private,
            Sorting::Custom,
        );
        playlist.entries.push(entry("song-1"));

        let copy = playlist.copy();
        assert_ne!(copy.id, playlist.id);
        assert_eq!(copy.name, playlist.name);
        assert_eq!(copy.entries, playlist.entries);
    }

    #[test]
    fn contains_song_checks_membership() {
        let mut playlist =
            Playlist::new("P", "", None, Visibility::Public, Sorting::Custom);
        playlist.entries.push(entry("song-1"));

        assert!(playlist.contains_song(&SongId::new("song-1")));
        assert!(!playlist.contains_song(&SongId::new("song-2")));
    }

    #[test]
    fn visibility_string_conversion() {
        assert_eq!(Visibility::Private.as_str(), "PRIVATE");
        assert_eq!(Visibility::from_str("PUBLIC"), Some(Visibility::Public));
        assert_eq!(Visibility::from_str("invalid"), None);
    }

    #[test]
    fn sorting_string_conversion() {
        assert_eq!(Sorting::RecentlyAdded.as_str(), "RECENTLY_ADDED");
        assert_eq!(Sorting::from_str("RELEASE_DATE"), Some(Sorting::ReleaseDate));
        assert_eq!(Sorting::from_str(""), None);
    }
}
