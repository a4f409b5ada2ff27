//! Storage contract
//!
//! The engine treats persistence as an opaque collaborator: id lookup,
//! persist, delete, and full scan, plus the library-membership relationship
//! table and the cover blob store. `delete_playlist` removes only the
//! playlist row; the engine performs the cascade over dependent rows
//! explicitly, so the invariant "no orphaned membership" never depends on a
//! store feature.

use crate::error::Result;
use crate::types::{
    Account, AccountId, CoverFile, LibraryEntry, Playlist, PlaylistId, Song, SongId,
};

/// Backing store contract
///
/// Implementations must apply each call atomically; the engine presumes the
/// store serializes conflicting concurrent writers (last-write-wins).
#[allow(async_fn_in_trait)]
pub trait Storage: Send + Sync {
    // Song operations

    /// Get a song by ID
    async fn find_song(&self, id: &SongId) -> Result<Option<Song>>;

    /// Insert or replace a song
    async fn persist_song(&self, song: Song) -> Result<()>;

    // Playlist operations

    /// Get a playlist by ID
    async fn find_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Insert or replace a playlist
    async fn persist_playlist(&self, playlist: Playlist) -> Result<()>;

    /// Delete a playlist row (no cascade)
    async fn delete_playlist(&self, id: &PlaylistId) -> Result<()>;

    /// Full scan over all playlists (used by the public listing)
    async fn list_playlists(&self) -> Result<Vec<Playlist>>;

    // Account operations

    /// Get an account by subject id
    async fn find_account(&self, uid: &AccountId) -> Result<Option<Account>>;

    /// Insert or replace an account
    async fn persist_account(&self, account: Account) -> Result<()>;

    // Library membership table

    /// Get the membership row for an `(account, playlist)` pair
    async fn find_library_entry(
        &self,
        account_id: &AccountId,
        playlist_id: &PlaylistId,
    ) -> Result<Option<LibraryEntry>>;

    /// All membership rows for an account (its library)
    async fn library_entries_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<LibraryEntry>>;

    /// All membership rows referencing a playlist
    async fn library_entries_for_playlist(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<Vec<LibraryEntry>>;

    /// Insert a membership row; replaces an existing row for the same pair
    async fn insert_library_entry(&self, entry: LibraryEntry) -> Result<()>;

    /// Remove the membership row for a pair; `false` if none existed
    async fn remove_library_entry(
        &self,
        account_id: &AccountId,
        playlist_id: &PlaylistId,
    ) -> Result<bool>;

    // Cover blobs

    /// Get a playlist's owned cover blob
    async fn find_cover(&self, playlist_id: &PlaylistId) -> Result<Option<CoverFile>>;

    /// Whether a playlist has an owned cover blob
    async fn has_cover(&self, playlist_id: &PlaylistId) -> Result<bool>;

    /// Insert or replace a playlist's cover blob
    async fn put_cover(&self, cover: CoverFile) -> Result<()>;

    /// Delete a playlist's cover blob; `false` if none existed
    async fn delete_cover(&self, playlist_id: &PlaylistId) -> Result<bool>;
}
