//! Identity/access gate
//!
//! Runs before every read or write that targets a playlist by id. The acting
//! identity is an explicit parameter on every call; there is no ambient
//! current-user state. The unauthenticated public listing bypasses the gate.

use medley_core::error::{MedleyError, Result};
use medley_core::types::{AccountId, Playlist, PlaylistId, Visibility};
use medley_core::Storage;
use tracing::warn;

/// Load a playlist and check the actor may touch it
///
/// - `NotFound` when the id does not resolve
/// - anything non-private is open to everyone (all library members are
///   equally privileged writers; there is no distinguished creator role)
/// - a private playlist requires a signed-in actor holding a library
///   membership for this exact playlist
pub async fn authorize<S: Storage>(
    store: &S,
    playlist_id: &PlaylistId,
    actor: Option<&AccountId>,
) -> Result<Playlist> {
    let Some(playlist) = store.find_playlist(playlist_id).await? else {
        warn!("playlist {} not found", playlist_id);
        return Err(MedleyError::not_found("playlist", playlist_id));
    };

    if playlist.visibility != Visibility::Private {
        return Ok(playlist);
    }

    let Some(account_id) = actor else {
        warn!("access denied to playlist {}: not signed in", playlist_id);
        return Err(MedleyError::access_denied("not signed in"));
    };

    if store
        .find_library_entry(account_id, playlist_id)
        .await?
        .is_some()
    {
        Ok(playlist)
    } else {
        warn!(
            "access denied to playlist {} for account {}",
            playlist.name, account_id
        );
        Err(MedleyError::access_denied(format!(
            "no library membership for playlist {playlist_id}"
        )))
    }
}
