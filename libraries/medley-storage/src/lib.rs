//! Medley Storage
//!
//! In-memory implementation of the `medley_core::Storage` contract.
//!
//! All tables live behind a single `RwLock`, so every `Storage` call is
//! atomic and conflicting writers are serialized (last-write-wins, matching
//! the contract the engine presumes of a durable store).
//!
//! # Architecture
//!
//! - **Entity arenas**: songs, playlists, and accounts keyed by id
//! - **Relationship table**: library memberships keyed by the composite
//!   `(account id, playlist id)`, with derived lookups by either side so
//!   there are no back-reference collections to keep in sync
//! - **Blob table**: one cover image per playlist

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;

pub use memory::MemoryStorage;
