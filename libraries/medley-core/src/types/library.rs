/// Library membership record
use crate::types::{AccountId, PlaylistId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Playlist-in-library membership
///
/// One row per `(account, playlist)` pair; the row is the single source of
/// truth for the relationship (no back-references on either entity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// The account whose library holds the playlist
    pub account_id: AccountId,

    /// The playlist that was added
    pub playlist_id: PlaylistId,

    /// When the playlist was added to the library
    pub added_at: NaiveDateTime,
}

impl LibraryEntry {
    /// Create a new membership record
    pub fn new(account_id: AccountId, playlist_id: PlaylistId, added_at: NaiveDateTime) -> Self {
        Self {
            account_id,
            playlist_id,
            added_at,
        }
    }
}
