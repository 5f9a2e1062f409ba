//! core/tags/util.rs
//! Frame helpers shared by tag reading.

use id3::{Tag, TagLike};
use id3::frame::Content;

/// Track number out of a raw TRCK value: `"3"` or `"3/12"` both give 3.
pub(crate) fn track_number(raw: &str) -> Option<u32> {
    let number = raw.split_once('/').map_or(raw, |(n, _total)| n);
    number.trim().parse().ok()
}

/// Text content of frame `id`, if present and textual.
pub(crate) fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    match tag.get(id)?.content() {
        Content::Text(s) => Some(s.clone()),
        _ => None,
    }
}
