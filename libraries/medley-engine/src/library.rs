//! Library membership ledger
//!
//! One row per `(account, playlist)` pair in the storage-level relationship
//! table; both sides of the relationship derive from the same row, so there
//! are no collections to keep in sync.

use chrono::NaiveDateTime;
use medley_core::dates;
use medley_core::error::{MedleyError, Result};
use medley_core::types::{AccountId, LibraryEntry, PlaylistId};
use medley_core::Storage;
use tracing::{info, warn};

/// Idempotent add: returns the stored add-date when the membership already
/// exists, otherwise inserts a row stamped now
pub async fn ensure_membership<S: Storage>(
    store: &S,
    account_id: &AccountId,
    playlist_id: &PlaylistId,
) -> Result<NaiveDateTime> {
    if let Some(existing) = store.find_library_entry(account_id, playlist_id).await? {
        warn!(
            "playlist {} already in library of account {}",
            playlist_id, account_id
        );
        return Ok(existing.added_at);
    }

    let added_at = dates::now();
    store
        .insert_library_entry(LibraryEntry::new(
            account_id.clone(),
            playlist_id.clone(),
            added_at,
        ))
        .await?;
    info!(
        "playlist {} added to library of account {}",
        playlist_id, account_id
    );
    Ok(added_at)
}

/// Remove the membership row; absent rows are a rejection, not a silent no-op
pub async fn remove_membership<S: Storage>(
    store: &S,
    account_id: &AccountId,
    playlist_id: &PlaylistId,
) -> Result<()> {
    if store.remove_library_entry(account_id, playlist_id).await? {
        info!(
            "playlist {} removed from library of account {}",
            playlist_id, account_id
        );
        Ok(())
    } else {
        warn!(
            "playlist {} is not in library of account {}",
            playlist_id, account_id
        );
        Err(MedleyError::not_found("library membership", playlist_id))
    }
}
