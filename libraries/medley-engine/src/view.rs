//! View projection
//!
//! Pure translation between persisted aggregates and the wire-facing view
//! model: position-indexed song views, formatted dates, and the computed
//! fields (song count, total playtime, cover URL). Projection never mutates
//! its input, and rebuilding an aggregate from a view never carries over the
//! source identity.

use medley_core::dates;
use medley_core::types::{Playlist, PlaylistId, Song, SongEntry, SongId, Sorting, Visibility};
use serde::{Deserialize, Serialize};

/// Wire-facing song representation
///
/// Doubles as input (song drafts on create/add) and output (projected
/// members); `position` and `add_date` are only meaningful on output or when
/// echoing a projected view back (reorder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongView {
    /// Song id; absent on drafts for songs not yet in the catalog
    #[serde(default)]
    pub song_id: Option<SongId>,

    /// Song title
    pub title: String,

    /// Artists
    pub artists: Vec<String>,

    /// Album name
    #[serde(default)]
    pub album: Option<String>,

    /// Genres
    #[serde(default)]
    pub genres: Vec<String>,

    /// Length in seconds
    #[serde(default)]
    pub playtime: u64,

    /// Release date (`YYYY-MM-DD`)
    #[serde(default)]
    pub release_date: Option<String>,

    /// Streaming links for the web player
    #[serde(default)]
    pub player_links: Vec<String>,

    /// Cover image URL
    #[serde(default)]
    pub cover_url: Option<String>,

    /// Position within the playlist (index in the stored order)
    #[serde(default)]
    pub position: Option<usize>,

    /// When the song was added to the playlist (`YYYY-MM-DDTHH:MM:SS`)
    #[serde(default)]
    pub add_date: Option<String>,
}

/// Wire-facing playlist representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistView {
    /// Playlist id; absent on creation drafts
    #[serde(default)]
    pub playlist_id: Option<PlaylistId>,

    /// Playlist name
    pub name: String,

    /// Playlist description
    #[serde(default)]
    pub description: String,

    /// Visibility tier
    pub visibility: Visibility,

    /// Sorting mode
    pub sorting: Sorting,

    /// Position-indexed member songs
    #[serde(default)]
    pub songs: Vec<SongView>,

    /// Total number of songs (computed on output; the declared count on a
    /// reorder request)
    #[serde(default)]
    pub song_count: usize,

    /// Total playtime in seconds (computed)
    #[serde(default)]
    pub playtime: u64,

    /// Cover URL: the owned blob's retrieval URL when one exists, otherwise
    /// the external URL
    #[serde(default)]
    pub cover_url: Option<String>,

    /// When the playlist was added to the viewer's library
    #[serde(default)]
    pub add_date: Option<String>,
}

/// Full-edit input: all four fields must validate or nothing is applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEdit {
    /// New name
    pub name: String,

    /// New description
    #[serde(default)]
    pub description: String,

    /// New visibility; `None` is a validation failure
    #[serde(default)]
    pub visibility: Option<Visibility>,

    /// New sorting; `None` is a validation failure
    #[serde(default)]
    pub sorting: Option<Sorting>,
}

/// Retrieval URL for a playlist's owned cover blob
pub fn cover_retrieval_url(base_url: &str, id: &PlaylistId) -> String {
    format!("{}/api/v1/playlists/{}/cover", base_url.trim_end_matches('/'), id)
}

/// Project a song together with its membership context
pub fn to_song_view(
    song: &Song,
    position: Option<usize>,
    added_at: Option<chrono::NaiveDateTime>,
) -> SongView {
    SongView {
        song_id: Some(song.id.clone()),
        title: song.title.clone(),
        artists: song.artists.clone(),
        album: song.album.clone(),
        genres: song.genres.clone(),
        playtime: song.playtime_secs,
        release_date: song.release_date.map(dates::format_date),
        player_links: song.player_links.clone(),
        cover_url: song.cover_url.clone(),
        position,
        add_date: added_at.map(dates::format_date_time),
    }
}

/// Project a playlist aggregate into its view
///
/// `songs` must be the resolved member songs aligned with the playlist's
/// entry order. `has_cover_blob` selects between the synthesized retrieval
/// URL and the external cover URL.
pub fn to_view(
    playlist: &Playlist,
    songs: &[Song],
    has_cover_blob: bool,
    viewer_add_date: Option<chrono::NaiveDateTime>,
    base_url: &str,
) -> PlaylistView {
    debug_assert_eq!(playlist.entries.len(), songs.len());

    let song_views: Vec<SongView> = playlist
        .entries
        .iter()
        .zip(songs)
        .enumerate()
        .map(|(position, (entry, song))| to_song_view(song, Some(position), Some(entry.added_at)))
        .collect();

    let playtime = songs.iter().map(|s| s.playtime_secs).sum();

    PlaylistView {
        playlist_id: Some(playlist.id.clone()),
        name: playlist.name.clone(),
        description: playlist.description.clone(),
        visibility: playlist.visibility,
        sorting: playlist.sorting,
        song_count: song_views.len(),
        songs: song_views,
        playtime,
        cover_url: if has_cover_blob {
            Some(cover_retrieval_url(base_url, &playlist.id))
        } else {
            playlist.cover_url.clone()
        },
        add_date: viewer_add_date.map(dates::format_date_time),
    }
}

/// Build a song record from a draft
///
/// The draft's id is NOT carried over: reuse-by-id is the registry's
/// decision, not the mapper's.
pub fn to_song(view: &SongView) -> Song {
    Song {
        id: SongId::generate(),
        title: view.title.clone(),
        artists: view.artists.clone(),
        album: view.album.clone(),
        genres: view.genres.clone(),
        playtime_secs: view.playtime,
        release_date: view.release_date.as_deref().and_then(dates::parse_date),
        player_links: view.player_links.clone(),
        cover_url: view.cover_url.clone(),
    }
}

/// Rebuild a playlist aggregate from a view
///
/// The result always gets a fresh identity; callers that replace an
/// existing aggregate's contents (reorder) keep the destination id
/// themselves. Songs without an id are skipped; memberships keep the
/// add-date carried on the view, defaulting to now.
pub fn to_playlist(view: &PlaylistView) -> Playlist {
    let entries: Vec<SongEntry> = view
        .songs
        .iter()
        .filter_map(|s| {
            s.song_id.clone().map(|id| {
                let added_at = s
                    .add_date
                    .as_deref()
                    .and_then(dates::parse_date_time)
                    .unwrap_or_else(dates::now);
                SongEntry::new(id, added_at)
            })
        })
        .collect();

    let mut playlist = Playlist::new(
        &view.name,
        &view.description,
        view.cover_url.clone(),
        view.visibility,
        view.sorting,
    );
    playlist.entries = entries;
    playlist
}
