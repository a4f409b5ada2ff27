//! Shared builders for the engine integration tests

use medley_core::types::{Account, AccountId, Sorting, Visibility};
use medley_core::Storage;
use medley_engine::{EngineConfig, PlaylistService, PlaylistView, SongView};
use medley_storage::MemoryStorage;
use std::sync::Arc;

/// Fresh in-memory store plus a playlist service over it
pub fn service() -> (Arc<MemoryStorage>, PlaylistService<MemoryStorage>) {
    let store = Arc::new(MemoryStorage::new());
    let service = PlaylistService::new(store.clone(), EngineConfig::default());
    (store, service)
}

/// Persist an account and return its id
pub async fn signed_in(store: &MemoryStorage, uid: &str) -> AccountId {
    let account_id = AccountId::new(uid);
    store
        .persist_account(Account::new(account_id.clone(), uid))
        .await
        .unwrap();
    account_id
}

/// Song draft without an id (a new song from the caller's point of view)
pub fn song_draft(title: &str, artist: &str, playtime: u64) -> SongView {
    SongView {
        song_id: None,
        title: title.to_string(),
        artists: vec![artist.to_string()],
        album: None,
        genres: vec![],
        playtime,
        release_date: None,
        player_links: vec![],
        cover_url: None,
        position: None,
        add_date: None,
    }
}

/// Playlist draft carrying the given songs
pub fn playlist_draft(name: &str, visibility: Visibility, songs: Vec<SongView>) -> PlaylistView {
    PlaylistView {
        playlist_id: None,
        name: name.to_string(),
        description: String::new(),
        visibility,
        sorting: Sorting::Custom,
        songs,
        song_count: 0,
        playtime: 0,
        cover_url: None,
        add_date: None,
    }
}
