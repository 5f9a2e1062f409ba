//! core/tags/mod.rs
//!
//! Tag I/O collaborator.
//! The engine only sees the [`TagIo`] trait; [`Id3TagIo`] is the on-disk implementation.
//! - [`TagIo::read_tag`] reads the editable fields (missing tag = empty fields).
//! - [`TagIo::write_tag`] writes them back.
//! - [`TagIo::remove_tag`] strips the tag from the file.

mod art;
mod read;
mod util;
mod write;

use std::path::Path;

use super::error::TagError;
use super::library::is_audio;
use super::types::TagFields;

pub use read::read_tag_length;

pub trait TagIo {
    fn read_tag(&self, path: &Path) -> Result<TagFields, TagError>;
    fn write_tag(&self, path: &Path, fields: &TagFields) -> Result<(), TagError>;
    fn remove_tag(&self, path: &Path) -> Result<(), TagError>;
}

/// ID3v2 tags via the `id3` crate. Writes always produce ID3v2.4.
///
/// Only files the scanner accepts are touched: prepending an ID3 header to another
/// container (FLAC, Ogg, MP4) would hide its real metadata and corrupt the stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3TagIo;

fn supported(path: &Path) -> Result<(), TagError> {
    if is_audio(path) {
        Ok(())
    } else {
        Err(TagError::Unsupported(path.to_path_buf()))
    }
}

impl TagIo for Id3TagIo {
    fn read_tag(&self, path: &Path) -> Result<TagFields, TagError> {
        supported(path)?;
        read::read_fields(path)
    }

    fn write_tag(&self, path: &Path, fields: &TagFields) -> Result<(), TagError> {
        supported(path)?;
        write::write_fields(path, fields)
    }

    fn remove_tag(&self, path: &Path) -> Result<(), TagError> {
        supported(path)?;
        id3::Tag::remove_from_path(path)
            .map(|_| ())
            .map_err(|source| TagError::Id3 {
                path: path.to_path_buf(),
                source,
            })
    }
}
