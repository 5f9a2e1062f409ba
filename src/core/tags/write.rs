//! core/tags/write.rs
//! Write `TagFields` back to a file as ID3v2.4.

use std::path::Path;

use id3::frame::{Comment, Picture, PictureType};
use id3::{ErrorKind, Tag, TagLike, Version};

use super::super::error::TagError;
use super::super::types::TagFields;

/// Helper: set/remove a plain text frame (T***). Empty text removes the frame.
fn set_text(tag: &mut Tag, id: &str, v: &str) {
    if v.is_empty() {
        let _ = tag.remove(id);
    } else {
        tag.set_text(id, v);
    }
}

/// Helper: write TRCK as "n" or "n/total", keeping whatever total the file had.
fn set_track(tag: &mut Tag, n: Option<u32>) {
    let total = tag.total_tracks();
    match n {
        None => {
            let _ = tag.remove("TRCK");
        }
        Some(n) => match total {
            Some(t) => tag.set_text("TRCK", format!("{n}/{t}")),
            None => tag.set_text("TRCK", n.to_string()),
        },
    }
}

/// Write every editable field. Frames we do not model are preserved.
///
/// Only a file without any tag starts fresh. An existing tag that fails to parse is
/// reported instead of being replaced (that would drop its other frames).
pub(crate) fn write_fields(path: &Path, fields: &TagFields) -> Result<(), TagError> {
    let id3_err = |source: id3::Error| TagError::Id3 {
        path: path.to_path_buf(),
        source,
    };
    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Tag::new(),
        Err(e) => return Err(id3_err(e)),
    };

    set_text(&mut tag, "TIT2", &fields.title);
    set_text(&mut tag, "TPE1", &fields.artist);
    set_text(&mut tag, "TALB", &fields.album);
    set_text(&mut tag, "TPE2", &fields.album_artist);
    set_text(&mut tag, "TCOM", &fields.composer);
    set_text(&mut tag, "TCON", &fields.genre);

    set_track(&mut tag, fields.track);

    // Year: TYER is authoritative on read; a stale TDRC would resurrect a cleared year.
    match fields.year {
        Some(y) => {
            let year = i32::try_from(y).map_err(|_| TagError::YearOutOfRange {
                path: path.to_path_buf(),
                year: y,
            })?;
            tag.set_year(year);
        }
        None => {
            tag.remove_year();
            let _ = tag.remove("TDRC");
        }
    }

    // Comment (COMM): replace with a single "eng" comment
    let _ = tag.remove("COMM");
    if !fields.comment.is_empty() {
        tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: String::new(),
            text: fields.comment.clone(),
        });
    }

    tag.remove_all_pictures();
    if let Some(art) = &fields.album_art {
        tag.add_frame(Picture {
            mime_type: art.mime_type.clone(),
            picture_type: PictureType::CoverFront,
            description: String::new(),
            data: art.data.clone(),
        });
    }

    tag.write_to_path(path, Version::Id3v24).map_err(id3_err)
}
