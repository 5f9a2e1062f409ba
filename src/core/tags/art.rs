//! core/tags/art.rs
//! Album art decoding collaborator (`image` crate).

use std::path::Path;

use super::super::error::ArtError;
use super::super::types::AlbumArt;

impl AlbumArt {
    /// Validate raw image bytes and detect their mime type.
    /// Bytes that do not decode as an image are rejected before they reach a tag.
    pub fn from_image_bytes(data: Vec<u8>) -> Result<Self, ArtError> {
        let format = image::guess_format(&data).map_err(|_| ArtError::UnknownFormat)?;
        image::load_from_memory_with_format(&data, format)?;
        Ok(Self {
            mime_type: format.to_mime_type().to_string(),
            data,
        })
    }

    pub fn from_image_file(path: &Path) -> Result<Self, ArtError> {
        let data = std::fs::read(path)?;
        Self::from_image_bytes(data)
    }

    /// (width, height) in pixels.
    pub fn dimensions(&self) -> Result<(u32, u32), ArtError> {
        let img = image::load_from_memory(&self.data)?;
        Ok((img.width(), img.height()))
    }
}
