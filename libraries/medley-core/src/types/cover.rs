/// Owned cover artifact
use crate::types::PlaylistId;
use serde::{Deserialize, Serialize};

/// Cover image blob owned by a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverFile {
    /// Owning playlist
    pub playlist_id: PlaylistId,

    /// MIME content type (e.g. "image/jpeg")
    pub content_type: String,

    /// Raw image bytes
    pub data: Vec<u8>,
}

impl CoverFile {
    /// Create a new cover blob
    pub fn new(playlist_id: PlaylistId, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            playlist_id,
            content_type: content_type.into(),
            data,
        }
    }
}
