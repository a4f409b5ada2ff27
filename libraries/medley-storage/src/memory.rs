//! In-memory tables behind one lock

use medley_core::error::Result;
use medley_core::types::{
    Account, AccountId, CoverFile, LibraryEntry, Playlist, PlaylistId, Song, SongId,
};
use medley_core::Storage;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    songs: HashMap<SongId, Song>,
    playlists: HashMap<PlaylistId, Playlist>,
    accounts: HashMap<AccountId, Account>,
    /// Library membership rows keyed by composite id
    library: HashMap<(AccountId, PlaylistId), LibraryEntry>,
    covers: HashMap<PlaylistId, CoverFile>,
}

/// In-memory `Storage` implementation
///
/// Suitable for tests and for embedding the engine without a database.
#[derive(Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    async fn find_song(&self, id: &SongId) -> Result<Option<Song>> {
        Ok(self.tables.read().await.songs.get(id).cloned())
    }

    async fn persist_song(&self, song: Song) -> Result<()> {
        self.tables.write().await.songs.insert(song.id.clone(), song);
        Ok(())
    }

    async fn find_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        Ok(self.tables.read().await.playlists.get(id).cloned())
    }

    async fn persist_playlist(&self, playlist: Playlist) -> Result<()> {
        self.tables
            .write()
            .await
            .playlists
            .insert(playlist.id.clone(), playlist);
        Ok(())
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> Result<()> {
        self.tables.write().await.playlists.remove(id);
        Ok(())
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>> {
        Ok(self.tables.read().await.playlists.values().cloned().collect())
    }

    async fn find_account(&self, uid: &AccountId) -> Result<Option<Account>> {
        Ok(self.tables.read().await.accounts.get(uid).cloned())
    }

    async fn persist_account(&self, account: Account) -> Result<()> {
        self.tables
            .write()
            .await
            .accounts
            .insert(account.uid.clone(), account);
        Ok(())
    }

    async fn find_library_entry(
        &self,
        account_id: &AccountId,
        playlist_id: &PlaylistId,
    ) -> Result<Option<LibraryEntry>> {
        let key = (account_id.clone(), playlist_id.clone());
        Ok(self.tables.read().await.library.get(&key).cloned())
    }

    async fn library_entries_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<LibraryEntry>> {
        let tables = self.tables.read().await;
        let mut entries: Vec<LibraryEntry> = tables
            .library
            .values()
            .filter(|e| &e.account_id == account_id)
            .cloned()
            .collect();
        // stable listing order: oldest additions first
        entries.sort_by_key(|e| e.added_at);
        Ok(entries)
    }

    async fn library_entries_for_playlist(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<Vec<LibraryEntry>> {
        let tables = self.tables.read().await;
        let mut entries: Vec<LibraryEntry> = tables
            .library
            .values()
            .filter(|e| &e.playlist_id == playlist_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.added_at);
        Ok(entries)
    }

    async fn insert_library_entry(&self, entry: LibraryEntry) -> Result<()> {
        let key = (entry.account_id.clone(), entry.playlist_id.clone());
        self.tables.write().await.library.insert(key, entry);
        Ok(())
    }

    async fn remove_library_entry(
        &self,
        account_id: &AccountId,
        playlist_id: &PlaylistId,
    ) -> Result<bool> {
        let key = (account_id.clone(), playlist_id.clone());
        Ok(self.tables.write().await.library.remove(&key).is_some())
    }

    async fn find_cover(&self, playlist_id: &PlaylistId) -> Result<Option<CoverFile>> {
        Ok(self.tables.read().await.covers.get(playlist_id).cloned())
    }

    async fn has_cover(&self, playlist_id: &PlaylistId) -> Result<bool> {
        Ok(self.tables.read().await.covers.contains_key(playlist_id))
    }

    async fn put_cover(&self, cover: CoverFile) -> Result<()> {
        self.tables
            .write()
            .await
            .covers
            .insert(cover.playlist_id.clone(), cover);
        Ok(())
    }

    async fn delete_cover(&self, playlist_id: &PlaylistId) -> Result<bool> {
        Ok(self.tables.write().await.covers.remove(playlist_id).is_some())
    }
}
