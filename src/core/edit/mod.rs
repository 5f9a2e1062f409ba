//! core/edit/mod.rs
//!
//! Batch editing over a selection of records.
//! - [`aggregate`] reduces a selection to one [`EditSurface`] (common value or `Keep`).
//! - [`apply_fields`] writes a surface back onto one record, honoring `Keep`.
//!
//! `Keep` is its own variant: a user typing the literal text `<keep>` gets that text.

mod aggregate;
mod apply;

pub use aggregate::aggregate;
pub use apply::apply_fields;

use super::types::{AlbumArt, MetadataRecord};

/// One field of the edit surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditValue<T> {
    /// Leave the field as it is on every record.
    Keep,
    Value(T),
}

impl<T> EditValue<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, EditValue::Keep)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            EditValue::Keep => None,
            EditValue::Value(v) => Some(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> EditValue<U> {
        match self {
            EditValue::Keep => EditValue::Keep,
            EditValue::Value(v) => EditValue::Value(f(v)),
        }
    }
}

impl<T> Default for EditValue<T> {
    fn default() -> Self {
        EditValue::Keep
    }
}

/// Filename slot: only editable when the surface covers exactly one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenameEdit {
    pub value: EditValue<String>,
    pub editable: bool,
}

/// Editable view over a selection.
///
/// Numeric fields are text, like a form: `""` clears the field and anything else
/// must parse as an integer when applied.
///
/// `EditSurface::default()` keeps everything; set the fields you want to change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSurface {
    pub filename: FilenameEdit,

    pub title: EditValue<String>,
    pub artist: EditValue<String>,
    pub album: EditValue<String>,
    pub year: EditValue<String>,
    pub track: EditValue<String>,
    pub album_artist: EditValue<String>,
    pub composer: EditValue<String>,
    pub genre: EditValue<String>,
    pub comment: EditValue<String>,

    /// `Value(None)` removes the art.
    pub album_art: EditValue<Option<AlbumArt>>,

    /// Display-only aggregates, summed over the selection.
    pub total_duration: u64,
    pub total_file_size: u64,
    pub record_count: usize,
}

impl EditSurface {
    /// The new filename for `record`, if this surface renames it.
    ///
    /// A blank name is passed through so the rename reports it as empty.
    pub fn pending_filename<'a>(&'a self, record: &MetadataRecord) -> Option<&'a str> {
        if !self.filename.editable {
            return None;
        }
        match &self.filename.value {
            EditValue::Value(name) if name != record.filename() => Some(name),
            _ => None,
        }
    }

    /// A surface that only replaces album art (insert / remove art commands).
    pub fn album_art_only(art: Option<AlbumArt>) -> Self {
        Self {
            album_art: EditValue::Value(art),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::core::types::TagFields;

    #[test]
    fn default_surface_keeps_everything() {
        let s = EditSurface::default();
        assert!(s.title.is_keep());
        assert!(s.album_art.is_keep());
        assert!(!s.filename.editable);
    }

    #[test]
    fn pending_filename_requires_editable_and_change() {
        let r = MetadataRecord::new(PathBuf::from("/m/a.mp3"), TagFields::default(), 0, 0);

        let mut s = EditSurface::default();
        s.filename.value = EditValue::Value("b.mp3".to_string());
        assert_eq!(s.pending_filename(&r), None);

        s.filename.editable = true;
        assert_eq!(s.pending_filename(&r), Some("b.mp3"));

        s.filename.value = EditValue::Value("a.mp3".to_string());
        assert_eq!(s.pending_filename(&r), None);

        s.filename.value = EditValue::Value("   ".to_string());
        assert_eq!(s.pending_filename(&r), Some("   "));
    }
}
