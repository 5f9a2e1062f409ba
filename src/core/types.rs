//! Core data types shared between the engine and its callers.
//!
//! Rule of thumb:
//! - These structs are "boring bags of data"
//! - No filesystem code
//! - No tag parsing code
//!
//! `MetadataRecord` represents ONE audio file on disk plus the metadata we edit.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Every field a format string placeholder can name.
///
/// The lowercase names (`%albumartist%` etc.) are user-visible configuration text,
/// so the spelling accepted by [`Field::from_str`] must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Filename,
    Title,
    Artist,
    Album,
    Year,
    Track,
    AlbumArtist,
    Composer,
    Genre,
    Comment,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Filename,
        Field::Title,
        Field::Artist,
        Field::Album,
        Field::Year,
        Field::Track,
        Field::AlbumArtist,
        Field::Composer,
        Field::Genre,
        Field::Comment,
    ];

    /// Placeholder spelling, as written between two `%` markers.
    pub fn placeholder_name(self) -> &'static str {
        match self {
            Field::Filename => "filename",
            Field::Title => "title",
            Field::Artist => "artist",
            Field::Album => "album",
            Field::Year => "year",
            Field::Track => "track",
            Field::AlbumArtist => "albumArtist",
            Field::Composer => "composer",
            Field::Genre => "genre",
            Field::Comment => "comment",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Year | Field::Track)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.placeholder_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Embedded cover image.
///
/// Equality is binary-content equality: two images with the same bytes are the same art,
/// whatever mime type the tag happened to record.
#[derive(Debug, Clone, Eq)]
pub struct AlbumArt {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl PartialEq for AlbumArt {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// The editable tag fields of one file.
///
/// Text fields are never "missing": a frame that is absent on disk reads as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFields {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_artist: String,
    pub composer: String,
    pub genre: String,
    pub comment: String,

    pub year: Option<u32>,
    pub track: Option<u32>,

    pub album_art: Option<AlbumArt>,
}

impl TagFields {
    /// Text value of a string field. `None` for numeric fields and `Filename`.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.title),
            Field::Artist => Some(&self.artist),
            Field::Album => Some(&self.album),
            Field::AlbumArtist => Some(&self.album_artist),
            Field::Composer => Some(&self.composer),
            Field::Genre => Some(&self.genre),
            Field::Comment => Some(&self.comment),
            Field::Filename | Field::Year | Field::Track => None,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Title => Some(&mut self.title),
            Field::Artist => Some(&mut self.artist),
            Field::Album => Some(&mut self.album),
            Field::AlbumArtist => Some(&mut self.album_artist),
            Field::Composer => Some(&mut self.composer),
            Field::Genre => Some(&mut self.genre),
            Field::Comment => Some(&mut self.comment),
            Field::Filename | Field::Year | Field::Track => None,
        }
    }

    pub fn number(&self, field: Field) -> Option<u32> {
        match field {
            Field::Year => self.year,
            Field::Track => self.track,
            _ => None,
        }
    }

    pub fn number_mut(&mut self, field: Field) -> Option<&mut Option<u32>> {
        match field {
            Field::Year => Some(&mut self.year),
            Field::Track => Some(&mut self.track),
            _ => None,
        }
    }
}

/// One audio file on disk plus the metadata we care about.
///
/// - `path` and `filename` only change together (see [`MetadataRecord::set_path`]).
/// - `duration` and `file_size` come from the file itself and are never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    path: PathBuf,
    filename: String,

    pub tags: TagFields,

    /// Seconds.
    duration: u64,
    /// Bytes.
    file_size: u64,
}

impl MetadataRecord {
    pub fn new(path: PathBuf, tags: TagFields, duration: u64, file_size: u64) -> Self {
        let filename = filename_of(&path);
        Self {
            path,
            filename,
            tags,
            duration,
            file_size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including extension. Ex: `Daft Punk- One More Time.mp3`
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// File name without extension. Ex: `Daft Punk- One More Time`
    pub fn filename_stem(&self) -> &str {
        split_extension(&self.filename).0
    }

    /// Extension without the dot, if the file has one.
    pub fn extension(&self) -> Option<&str> {
        split_extension(&self.filename).1
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Called after the file has been relocated on disk. Keeps `filename` in sync.
    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.filename = filename_of(&path);
        self.path = path;
    }
}

fn filename_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Split `name.ext` into (`name`, Some(`ext`)).
/// Dotfiles like `.hidden` have no extension.
pub(crate) fn split_extension(filename: &str) -> (&str, Option<&str>) {
    match filename.rfind('.') {
        Some(i) if i > 0 => (&filename[..i], Some(&filename[i + 1..])),
        _ => (filename, None),
    }
}
