//! Medley Core
//!
//! Platform-agnostic domain types, validation rules, and error handling for
//! the Medley playlist catalog.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`, `Account`, membership records
//! - **Storage Contract**: the `Storage` trait implemented by backing stores
//! - **Validation**: name/description charset and length rules
//! - **Error Handling**: unified `MedleyError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use medley_core::types::{Playlist, Song, Sorting, Visibility};
//!
//! let song = Song::new("Lose Yourself", vec!["Eminem".to_string()]);
//! let playlist = Playlist::new(
//!     "Chill Vibes",
//!     "Relaxing tracks for the evening.",
//!     None,
//!     Visibility::Private,
//!     Sorting::Custom,
//! );
//! assert_eq!(playlist.song_count(), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dates;
pub mod error;
pub mod storage;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use error::{MedleyError, Result};
pub use storage::Storage;

// Export all types
pub use types::{
    Account, AccountId, CoverFile, LibraryEntry, Playlist, PlaylistId, ServiceLink, Song,
    SongEntry, SongId, Sorting, Visibility,
};
