//! Medley Engine
//!
//! The rules layer of the Medley playlist catalog: access gating, playlist
//! and song services, library membership, account management, and view
//! projection. Everything is generic over the `medley_core::Storage`
//! contract; the engine itself holds no state beyond its configuration.
//!
//! # Architecture
//!
//! - **Access gate** (`access`): loads a playlist and checks the acting
//!   identity against its visibility and the library ledger
//! - **Services** (`playlists`, `accounts`, `registry`): own the mutation
//!   rules for their aggregates
//! - **View projection** (`view`): pure translation between aggregates and
//!   the wire-facing view model
//! - **Auth** (`auth`): bearer-token verification behind a trait

#![forbid(unsafe_code)]

pub mod access;
pub mod accounts;
pub mod auth;
pub mod config;
pub mod library;
pub mod playlists;
pub mod registry;
pub mod view;

pub use accounts::AccountService;
pub use auth::{JwtVerifier, TokenVerifier};
pub use config::EngineConfig;
pub use playlists::PlaylistService;
pub use registry::SongRegistry;
pub use view::{PlaylistEdit, PlaylistView, SongView};
