/// Song domain type
use crate::types::SongId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A song in the catalog
///
/// Songs are shared across playlists: a playlist membership references a song
/// by id and carries its own add-date, so a song record is never mutated when
/// it joins or leaves a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title (non-empty)
    pub title: String,

    /// Artists (non-empty)
    pub artists: Vec<String>,

    /// Album name
    pub album: Option<String>,

    /// Genres
    pub genres: Vec<String>,

    /// Length of the song in seconds
    pub playtime_secs: u64,

    /// Release date
    pub release_date: Option<NaiveDate>,

    /// Streaming links for the web player
    pub player_links: Vec<String>,

    /// URL of the cover image
    pub cover_url: Option<String>,
}

impl Song {
    /// Create a new song with minimal metadata
    pub fn new(title: impl Into<String>, artists: Vec<String>) -> Self {
        Self {
            id: SongId::generate(),
            title: title.into(),
            artists,
            album: None,
            genres: Vec::new(),
            playtime_secs: 0,
            release_date: None,
            player_links: Vec::new(),
            cover_url: None,
        }
    }
}
