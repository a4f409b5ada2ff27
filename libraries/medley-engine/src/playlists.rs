//! Playlist service
//!
//! Every mutating operation follows the same three-phase contract: load the
//! target by id, run the access gate, validate the operation-specific input.
//! Only when all three pass does the mutation apply, and the aggregate is
//! re-projected for the response. Any failure leaves the aggregate
//! unchanged.

use crate::access;
use crate::config::EngineConfig;
use crate::library;
use crate::registry::SongRegistry;
use crate::view::{self, PlaylistEdit, PlaylistView, SongView};
use chrono::NaiveDateTime;
use medley_core::dates;
use medley_core::error::{MedleyError, Result};
use medley_core::types::{
    AccountId, CoverFile, Playlist, PlaylistId, Song, SongEntry, SongId, Sorting, Visibility,
};
use medley_core::validate;
use medley_core::Storage;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Owns playlist aggregates and their mutation rules
pub struct PlaylistService<S> {
    store: Arc<S>,
    registry: SongRegistry<S>,
    config: EngineConfig,
}

impl<S: Storage> PlaylistService<S> {
    /// Create a playlist service over the given store
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        Self {
            registry: SongRegistry::new(store.clone()),
            store,
            config,
        }
    }

    /// The song registry backing this service
    pub fn registry(&self) -> &SongRegistry<S> {
        &self.registry
    }

    // === Reads ===

    /// Gated single-playlist read, stamped with the viewer's add-date
    pub async fn get(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
    ) -> Result<PlaylistView> {
        let playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;
        self.project(&playlist, actor).await
    }

    /// All playlists in an account's library, oldest additions first
    pub async fn library_for(&self, account_id: &AccountId) -> Result<Vec<PlaylistView>> {
        let entries = self
            .store
            .library_entries_for_account(account_id)
            .await?;

        let mut views = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(playlist) = self.store.find_playlist(&entry.playlist_id).await? else {
                // membership rows are cascaded with the playlist; a dangling
                // row means the store broke that invariant
                return Err(MedleyError::storage(format!(
                    "library row references missing playlist {}",
                    entry.playlist_id
                )));
            };
            views.push(self.project_with(&playlist, Some(entry.added_at)).await?);
        }
        info!("library contains {} playlists", views.len());
        Ok(views)
    }

    /// Pretty-printed JSON export of an account's library
    pub async fn library_json(&self, account_id: &AccountId) -> Result<String> {
        let views = self.library_for(account_id).await?;
        Ok(serde_json::to_string_pretty(&views)?)
    }

    /// Unauthenticated listing of all PUBLIC playlists
    pub async fn list_public(&self) -> Result<Vec<PlaylistView>> {
        let now = dates::now();
        let mut public: Vec<Playlist> = self
            .store
            .list_playlists()
            .await?
            .into_iter()
            .filter(|p| p.visibility == Visibility::Public)
            .collect();
        public.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.as_str().cmp(b.id.as_str())));

        let mut views = Vec::with_capacity(public.len());
        for playlist in &public {
            views.push(self.project_with(playlist, Some(now)).await?);
        }
        Ok(views)
    }

    /// Unauthenticated single read; anything non-PUBLIC is not found on this
    /// path, even when the id resolves
    pub async fn get_public(&self, playlist_id: &PlaylistId) -> Result<PlaylistView> {
        let Some(playlist) = self.store.find_playlist(playlist_id).await? else {
            return Err(MedleyError::not_found("playlist", playlist_id));
        };
        if playlist.visibility != Visibility::Public {
            warn!("playlist {} is not public", playlist_id);
            return Err(MedleyError::not_found("playlist", playlist_id));
        }
        self.project_with(&playlist, None).await
    }

    // === Creation, copy, delete ===

    /// Create a playlist from a draft
    ///
    /// Validates name and description, registers every supplied song, then
    /// records the creator's library membership and returns the view stamped
    /// with that add-date.
    pub async fn create(
        &self,
        actor: Option<&AccountId>,
        draft: &PlaylistView,
    ) -> Result<PlaylistView> {
        validate::validate_name(&draft.name)?;
        validate::validate_description(&draft.description)?;

        let account_id = self.require_account(actor).await?;

        let mut playlist = Playlist::new(
            &draft.name,
            &draft.description,
            draft.cover_url.clone(),
            draft.visibility,
            draft.sorting,
        );
        for song_view in &draft.songs {
            let song = self.registry.get_or_create(song_view).await?;
            if playlist.contains_song(&song.id) {
                continue; // membership identity is (playlist, song)
            }
            let added_at = song_view
                .add_date
                .as_deref()
                .and_then(dates::parse_date_time)
                .unwrap_or_else(dates::now);
            playlist.entries.push(SongEntry::new(song.id, added_at));
        }

        self.store.persist_playlist(playlist.clone()).await?;
        let add_date =
            library::ensure_membership(self.store.as_ref(), &account_id, &playlist.id).await?;
        info!("playlist {} created", playlist.name);
        self.project_with(&playlist, Some(add_date)).await
    }

    /// Copy a playlist the actor can read into a fresh, independent aggregate
    ///
    /// The copy shares song records (memberships keep their original
    /// add-dates) but nothing else: fresh identity, no owned cover blob, and
    /// its own library membership for the copying account.
    pub async fn copy(
        &self,
        actor: Option<&AccountId>,
        source_id: &PlaylistId,
    ) -> Result<PlaylistView> {
        let source = access::authorize(self.store.as_ref(), source_id, actor).await?;
        let account_id = self.require_account(actor).await?;

        let copy = source.copy();
        self.store.persist_playlist(copy.clone()).await?;
        let add_date =
            library::ensure_membership(self.store.as_ref(), &account_id, &copy.id).await?;
        info!(
            "playlist {} with id {} was copied to id {}",
            source.name, source.id, copy.id
        );
        self.project_with(&copy, Some(add_date)).await
    }

    /// Delete a playlist and cascade its dependents
    ///
    /// The cascade is explicit: library rows and the cover blob are
    /// enumerated and removed before the parent row, so no orphaned
    /// membership can survive regardless of store behavior.
    pub async fn delete(&self, actor: Option<&AccountId>, playlist_id: &PlaylistId) -> Result<()> {
        let playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;

        for entry in self
            .store
            .library_entries_for_playlist(playlist_id)
            .await?
        {
            self.store
                .remove_library_entry(&entry.account_id, playlist_id)
                .await?;
        }
        self.store.delete_cover(playlist_id).await?;
        self.store.delete_playlist(playlist_id).await?;
        info!("playlist {} was deleted", playlist.name);
        Ok(())
    }

    // === Library membership ===

    /// Add a readable playlist to the actor's library (idempotent)
    pub async fn add_to_library(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
    ) -> Result<PlaylistView> {
        let playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;
        let account_id = self.require_account(actor).await?;

        let add_date =
            library::ensure_membership(self.store.as_ref(), &account_id, playlist_id).await?;
        self.project_with(&playlist, Some(add_date)).await
    }

    /// Remove a playlist from the actor's library; absent membership is a
    /// rejection
    pub async fn remove_from_library(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
    ) -> Result<()> {
        access::authorize(self.store.as_ref(), playlist_id, actor).await?;
        let account_id = self.require_account(actor).await?;
        library::remove_membership(self.store.as_ref(), &account_id, playlist_id).await
    }

    // === Metadata edits ===

    /// Full edit: all four fields validate independently or nothing applies
    pub async fn edit(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
        edit: &PlaylistEdit,
    ) -> Result<PlaylistView> {
        let mut playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;

        validate::validate_name(&edit.name)?;
        validate::validate_description(&edit.description)?;
        let visibility = edit
            .visibility
            .ok_or_else(|| MedleyError::invalid_input("visibility must be set"))?;
        let sorting = edit
            .sorting
            .ok_or_else(|| MedleyError::invalid_input("sorting must be set"))?;

        playlist.name = edit.name.clone();
        playlist.description = edit.description.clone();
        playlist.visibility = visibility;
        playlist.sorting = sorting;
        self.store.persist_playlist(playlist.clone()).await?;
        info!("playlist {} edited", playlist.name);
        self.project(&playlist, actor).await
    }

    /// Rename; equal names are a succeed-and-return-current no-op
    pub async fn rename(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
        new_name: &str,
    ) -> Result<PlaylistView> {
        let mut playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;
        validate::validate_name(new_name)?;

        if playlist.name == new_name {
            info!("playlist {} keeps its name", playlist_id);
        } else {
            playlist.name = new_name.to_string();
            self.store.persist_playlist(playlist.clone()).await?;
            info!("playlist {} renamed to {}", playlist_id, new_name);
        }
        self.project(&playlist, actor).await
    }

    /// Change the description; equal values are a no-op
    pub async fn change_description(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
        new_description: &str,
    ) -> Result<PlaylistView> {
        let mut playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;
        validate::validate_description(new_description)?;

        if playlist.description != new_description {
            playlist.description = new_description.to_string();
            self.store.persist_playlist(playlist.clone()).await?;
            info!("playlist {} changed description", playlist_id);
        }
        self.project(&playlist, actor).await
    }

    /// Change visibility; equal values are a no-op
    pub async fn change_visibility(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
        visibility: Visibility,
    ) -> Result<PlaylistView> {
        let mut playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;

        if playlist.visibility != visibility {
            playlist.visibility = visibility;
            self.store.persist_playlist(playlist.clone()).await?;
            info!(
                "visibility of playlist {} changed to {}",
                playlist_id,
                visibility.as_str()
            );
        }
        self.project(&playlist, actor).await
    }

    /// Change the sorting mode; equal values are a no-op
    pub async fn change_sorting(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
        sorting: Sorting,
    ) -> Result<PlaylistView> {
        let mut playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;

        if playlist.sorting != sorting {
            playlist.sorting = sorting;
            self.store.persist_playlist(playlist.clone()).await?;
            info!(
                "sorting of playlist {} changed to {}",
                playlist_id,
                sorting.as_str()
            );
        }
        self.project(&playlist, actor).await
    }

    // === Song membership ===

    /// Register the song and append a membership at the end of the order
    ///
    /// Adding a song that is already a member is an idempotent success: the
    /// composite `(playlist, song)` identity admits no duplicate entries.
    pub async fn add_song(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
        draft: &SongView,
    ) -> Result<PlaylistView> {
        let mut playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;
        let song = self.registry.get_or_create(draft).await?;

        if playlist.contains_song(&song.id) {
            info!(
                "song {} is already in playlist {}",
                song.title, playlist.name
            );
            return self.project(&playlist, actor).await;
        }

        playlist
            .entries
            .push(SongEntry::new(song.id.clone(), dates::now()));
        self.store.persist_playlist(playlist.clone()).await?;
        info!("song {} was added to playlist {}", song.title, playlist.name);
        self.project(&playlist, actor).await
    }

    /// Remove the membership at `position` iff it references `song_id`
    ///
    /// The double-check guards against removing the wrong occurrence when
    /// the caller's position is stale: a song with that id elsewhere in the
    /// list is not good enough.
    pub async fn remove_song(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
        song_id: &SongId,
        position: usize,
    ) -> Result<PlaylistView> {
        let mut playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;

        let matches = playlist
            .entries
            .get(position)
            .is_some_and(|entry| &entry.song_id == song_id);
        if !matches {
            warn!(
                "song {} is not at position {} of playlist {}",
                song_id, position, playlist.name
            );
            return Err(MedleyError::not_found(
                "song membership",
                format!("{song_id} at position {position}"),
            ));
        }

        playlist.entries.remove(position);
        self.store.persist_playlist(playlist.clone()).await?;
        info!(
            "song {} was removed from playlist {}",
            song_id, playlist.name
        );
        self.project(&playlist, actor).await
    }

    /// Replace the stored order with the order carried by the view
    ///
    /// The supplied list must be a permutation of the stored memberships:
    /// its length must equal both the declared song count and the stored
    /// cardinality, and it must reference exactly the stored song set.
    /// Add-dates are preserved from the supplied entries.
    pub async fn reorder(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
        draft: &PlaylistView,
    ) -> Result<PlaylistView> {
        if draft.playlist_id.as_ref() != Some(playlist_id) {
            return Err(MedleyError::invalid_input("playlist ids do not match"));
        }

        let mut playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;

        // the rebuilt aggregate never carries the source identity; only its
        // membership list is taken over
        let replacement = view::to_playlist(draft);

        if playlist.entries.len() != draft.song_count
            || playlist.entries.len() != replacement.entries.len()
        {
            warn!(
                "reorder of playlist {} rejected: {} stored songs, {} supplied",
                playlist_id,
                playlist.entries.len(),
                replacement.entries.len()
            );
            return Err(MedleyError::invalid_input(
                "new song order must contain exactly the stored songs",
            ));
        }

        let stored: HashSet<&SongId> = playlist.entries.iter().map(|e| &e.song_id).collect();
        let supplied: HashSet<&SongId> = replacement.entries.iter().map(|e| &e.song_id).collect();
        if stored != supplied || supplied.len() != replacement.entries.len() {
            return Err(MedleyError::invalid_input(
                "new song order must be a permutation of the stored songs",
            ));
        }

        playlist.entries = replacement.entries;
        self.store.persist_playlist(playlist.clone()).await?;
        info!("song order of playlist {} replaced", playlist_id);
        self.project(&playlist, actor).await
    }

    // === Cover artifacts ===

    /// Gated read of the owned cover blob
    pub async fn get_cover(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
    ) -> Result<CoverFile> {
        access::authorize(self.store.as_ref(), playlist_id, actor).await?;
        self.store
            .find_cover(playlist_id)
            .await?
            .ok_or_else(|| MedleyError::not_found("cover", playlist_id))
    }

    /// Replace the owned cover blob (the old blob is deleted first)
    ///
    /// An external cover URL is left in place but the blob takes precedence
    /// in projections.
    pub async fn set_cover(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<PlaylistView> {
        let playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;

        self.store.delete_cover(playlist_id).await?;
        self.store
            .put_cover(CoverFile::new(playlist_id.clone(), content_type, data))
            .await?;
        info!("cover of playlist {} replaced", playlist_id);
        self.project(&playlist, actor).await
    }

    /// Remove the owned cover blob; the external URL is not restored
    pub async fn delete_cover(
        &self,
        actor: Option<&AccountId>,
        playlist_id: &PlaylistId,
    ) -> Result<PlaylistView> {
        let mut playlist = access::authorize(self.store.as_ref(), playlist_id, actor).await?;

        if !self.store.delete_cover(playlist_id).await? {
            return Err(MedleyError::not_found("cover", playlist_id));
        }
        playlist.cover_url = None;
        self.store.persist_playlist(playlist.clone()).await?;
        info!("cover of playlist {} deleted", playlist_id);
        self.project(&playlist, actor).await
    }

    // === Helpers ===

    async fn require_account(&self, actor: Option<&AccountId>) -> Result<AccountId> {
        let Some(account_id) = actor else {
            return Err(MedleyError::access_denied("not signed in"));
        };
        if self.store.find_account(account_id).await?.is_none() {
            return Err(MedleyError::access_denied(format!(
                "unknown account {account_id}"
            )));
        }
        Ok(account_id.clone())
    }

    async fn project(
        &self,
        playlist: &Playlist,
        viewer: Option<&AccountId>,
    ) -> Result<PlaylistView> {
        let add_date = match viewer {
            Some(account_id) => self
                .store
                .find_library_entry(account_id, &playlist.id)
                .await?
                .map(|e| e.added_at),
            None => None,
        };
        self.project_with(playlist, add_date).await
    }

    async fn project_with(
        &self,
        playlist: &Playlist,
        add_date: Option<NaiveDateTime>,
    ) -> Result<PlaylistView> {
        let mut songs: Vec<Song> = Vec::with_capacity(playlist.entries.len());
        for entry in &playlist.entries {
            let Some(song) = self.store.find_song(&entry.song_id).await? else {
                return Err(MedleyError::storage(format!(
                    "playlist {} references missing song {}",
                    playlist.id, entry.song_id
                )));
            };
            songs.push(song);
        }
        let has_cover = self.store.has_cover(&playlist.id).await?;
        Ok(view::to_view(
            playlist,
            &songs,
            has_cover,
            add_date,
            &self.config.public_base_url,
        ))
    }
}
