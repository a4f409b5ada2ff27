//! Song registry tests

mod test_helpers;

use medley_core::types::SongId;
use medley_core::Storage;
use medley_engine::SongRegistry;
use medley_storage::MemoryStorage;
use std::sync::Arc;
use test_helpers::song_draft;

fn registry() -> (Arc<MemoryStorage>, SongRegistry<MemoryStorage>) {
    let store = Arc::new(MemoryStorage::new());
    let registry = SongRegistry::new(store.clone());
    (store, registry)
}

#[tokio::test]
async fn new_draft_is_persisted_with_generated_id() {
    let (store, registry) = registry();

    let song = registry
        .get_or_create(&song_draft("Lose Yourself", "Eminem", 326))
        .await
        .unwrap();
    assert_eq!(song.title, "Lose Yourself");
    assert_eq!(song.playtime_secs, 326);
    assert!(store.find_song(&song.id).await.unwrap().is_some());
}

#[tokio::test]
async fn resolving_id_reuses_the_stored_record() {
    let (_store, registry) = registry();

    let stored = registry
        .get_or_create(&song_draft("Original", "Artist", 100))
        .await
        .unwrap();

    // draft disagrees on every field but carries the stored id
    let mut draft = song_draft("Different Title", "Different Artist", 999);
    draft.song_id = Some(stored.id.clone());

    let reused = registry.get_or_create(&draft).await.unwrap();
    assert_eq!(reused, stored, "stored record wins, nothing is overwritten");
}

#[tokio::test]
async fn unresolvable_id_creates_a_fresh_record() {
    let (_store, registry) = registry();

    let mut draft = song_draft("New", "Artist", 100);
    draft.song_id = Some(SongId::new("never-stored"));

    let song = registry.get_or_create(&draft).await.unwrap();
    assert_ne!(song.id, SongId::new("never-stored"));
    assert_eq!(song.title, "New");
}

#[tokio::test]
async fn blank_title_or_missing_artists_are_rejected() {
    let (_store, registry) = registry();

    let mut blank = song_draft("   ", "Artist", 100);
    assert!(registry.get_or_create(&blank).await.is_err());

    blank = song_draft("Title", "Artist", 100);
    blank.artists.clear();
    assert!(registry.get_or_create(&blank).await.is_err());
}
