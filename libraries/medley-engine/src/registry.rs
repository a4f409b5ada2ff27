//! Song registry
//!
//! Creates-or-reuses song records. Reuse is strictly by id: when a draft
//! carries an id that resolves, the stored record wins and none of its
//! fields are overwritten, even if the draft disagrees.

use crate::view::{self, SongView};
use medley_core::error::{MedleyError, Result};
use medley_core::types::{Song, SongId};
use medley_core::Storage;
use std::sync::Arc;
use tracing::info;

/// Owns song records
pub struct SongRegistry<S> {
    store: Arc<S>,
}

impl<S: Storage> SongRegistry<S> {
    /// Create a registry over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get a song by ID
    pub async fn get(&self, id: &SongId) -> Result<Option<Song>> {
        self.store.find_song(id).await
    }

    /// Reuse by id, else create
    ///
    /// Rejects drafts with a blank title or no artists. A draft id that
    /// resolves returns the stored song unchanged; otherwise a new record is
    /// persisted from the draft fields.
    pub async fn get_or_create(&self, draft: &SongView) -> Result<Song> {
        if draft.title.trim().is_empty() || draft.artists.is_empty() {
            return Err(MedleyError::invalid_input(
                "song needs a title and at least one artist",
            ));
        }

        if let Some(id) = &draft.song_id {
            if let Some(existing) = self.store.find_song(id).await? {
                info!("song {} already exists", existing.title);
                return Ok(existing);
            }
        }

        let song = view::to_song(draft);
        self.store.persist_song(song.clone()).await?;
        info!("song {} is new", song.title);
        Ok(song)
    }
}
