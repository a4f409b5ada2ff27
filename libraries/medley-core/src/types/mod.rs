//! Domain types for the Medley catalog

mod account;
mod cover;
mod ids;
mod library;
mod playlist;
mod song;

pub use account::{Account, ServiceLink, SERVICE_SLOTS};
pub use cover::CoverFile;
pub use ids::{AccountId, PlaylistId, SongId};
pub use library::LibraryEntry;
pub use playlist::{Playlist, SongEntry, Sorting, Visibility};
pub use song::Song;
