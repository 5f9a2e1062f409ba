//! Error types for the tag engine.
//!
//! Format errors are reported once per batch (nothing is attempted).
//! Everything else is per record and ends up in a `BatchReport`.

use std::path::PathBuf;

use thiserror::Error;

use super::types::Field;

/// A format string that cannot be used at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Two placeholders with nothing between them: there is no way to tell where one
    /// capture stops and the next starts.
    #[error("ambiguous format string: %{first}% is directly followed by %{second}%")]
    Ambiguous { first: Field, second: Field },

    #[error("format string {0:?} contains no placeholders")]
    NoPlaceholders(String),
}

/// A numeric field got text that is not a non-negative integer (or a year out of range).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {text:?} is not a valid number")]
pub struct ParseError {
    pub field: Field,
    pub text: String,
}

/// Filename -> tag failed for one record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("filename {0:?} does not match the format string")]
    NoMatch(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("destination already exists: {}", .0.display())]
    PathCollision(PathBuf),

    #[error("new filename is empty")]
    EmptyName,

    #[error("rename {} failed: {source}", .from.display())]
    Io {
        from: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Tag collaborator failures (read, write or remove).
#[derive(Error, Debug)]
pub enum TagError {
    #[error("{}: {source}", .path.display())]
    Id3 {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not a container the ID3 backend can safely read or write.
    #[error("{}: unsupported file type (only mp3 is tagged)", .0.display())]
    Unsupported(PathBuf),

    #[error("{}: year {year} cannot be stored", .path.display())]
    YearOutOfRange { path: PathBuf, year: u32 },
}

/// A search query that does not parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("advanced search has no criteria")]
    Empty,

    #[error("malformed criterion {0:?} (expected name=\"value\")")]
    Syntax(String),

    #[error("unknown property {0:?}")]
    UnknownProperty(String),

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: Field, value: String },
}

/// Album art bytes that cannot be decoded as an image.
#[derive(Error, Debug)]
pub enum ArtError {
    #[error("unrecognized image format")]
    UnknownFormat,

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("reading image failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that can fail one record inside a batch.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Rename(#[from] RenameError),

    #[error(transparent)]
    Tag(#[from] TagError),
}
