//! core/tags/read.rs
//! Read ID3 tags from a file and convert them into `TagFields`.
//!
//! - A file with no tag at all is not an error: it reads as empty fields.
//! - Text frames that are missing read as `""`.

use std::path::Path;

use id3::{ErrorKind, Tag, TagLike};

use super::super::error::TagError;
use super::super::types::{AlbumArt, TagFields};
use super::super::util::text_or_empty;
use super::util::{text_frame, track_number};

pub(crate) fn read_fields(path: &Path) -> Result<TagFields, TagError> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(fields_from_tag(&tag)),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Ok(TagFields::default()),
        Err(source) => Err(TagError::Id3 {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Track length stored in the tag (TLEN, milliseconds), in whole seconds.
/// Used when the audio stream itself cannot be probed.
pub fn read_tag_length(path: &Path) -> Option<u64> {
    let tag = Tag::read_from_path(path).ok()?;
    let ms = text_frame(&tag, "TLEN")?.trim().parse::<u64>().ok()?;
    Some(ms / 1000)
}

fn fields_from_tag(tag: &Tag) -> TagFields {
    let year = tag
        .year()
        .or_else(|| tag.date_recorded().map(|d| d.year))
        .and_then(|y| u32::try_from(y).ok());

    TagFields {
        title: text_or_empty(tag.title()),
        artist: text_or_empty(tag.artist()),
        album: text_or_empty(tag.album()),
        album_artist: text_or_empty(tag.album_artist()),
        composer: text_frame(tag, "TCOM").unwrap_or_default(),
        genre: text_frame(tag, "TCON").unwrap_or_default(),
        comment: first_comment(tag).unwrap_or_default(),

        year,
        track: tag
            .track()
            .or_else(|| text_frame(tag, "TRCK").as_deref().and_then(track_number)),

        album_art: first_picture(tag),
    }
}

fn first_comment(tag: &Tag) -> Option<String> {
    tag.comments().next().map(|c| c.text.clone())
}

fn first_picture(tag: &Tag) -> Option<AlbumArt> {
    tag.pictures().next().map(|p| AlbumArt {
        data: p.data.clone(),
        mime_type: p.mime_type.clone(),
    })
}
