//! Library membership ledger tests

mod test_helpers;

use medley_core::types::Visibility;
use medley_core::Storage;
use test_helpers::{playlist_draft, service, signed_in};

#[tokio::test]
async fn add_to_library_is_idempotent() {
    let (store, playlists) = service();
    let alice = signed_in(&store, "alice").await;
    let bob = signed_in(&store, "bob").await;

    let id = playlists
        .create(Some(&alice), &playlist_draft("Mix", Visibility::Public, vec![]))
        .await
        .unwrap()
        .playlist_id
        .unwrap();

    let first = playlists.add_to_library(Some(&bob), &id).await.unwrap();
    let second = playlists.add_to_library(Some(&bob), &id).await.unwrap();
    assert_eq!(first.add_date, second.add_date, "re-adding keeps the stored add-date");

    let rows = store.library_entries_for_playlist(&id).await.unwrap();
    assert_eq!(rows.len(), 2, "alice's creation row plus bob's single row");
}

#[tokio::test]
async fn remove_from_library_rejects_absent_membership() {
    let (store, playlists) = service();
    let alice = signed_in(&store, "alice").await;
    let bob = signed_in(&store, "bob").await;

    let id = playlists
        .create(Some(&alice), &playlist_draft("Mix", Visibility::Public, vec![]))
        .await
        .unwrap()
        .playlist_id
        .unwrap();

    // bob never added it
    let err = playlists
        .remove_from_library(Some(&bob), &id)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    playlists.add_to_library(Some(&bob), &id).await.unwrap();
    playlists.remove_from_library(Some(&bob), &id).await.unwrap();
    assert!(store.find_library_entry(&bob, &id).await.unwrap().is_none());

    // the playlist itself survives membership removal
    assert!(store.find_playlist(&id).await.unwrap().is_some());
}

#[tokio::test]
async fn removing_membership_locks_out_private_reads() {
    let (store, playlists) = service();
    let alice = signed_in(&store, "alice").await;

    let id = playlists
        .create(Some(&alice), &playlist_draft("Mix", Visibility::Private, vec![]))
        .await
        .unwrap()
        .playlist_id
        .unwrap();

    playlists.remove_from_library(Some(&alice), &id).await.unwrap();
    assert!(playlists
        .get(Some(&alice), &id)
        .await
        .unwrap_err()
        .is_access_denied());
}
