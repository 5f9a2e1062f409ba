//! core/edit/apply.rs
//! EditSurface -> record fields (in memory only).
//!
//! Renaming and persisting are the batch layer's job (see `core::batch::save_tags`).

use tracing::debug;

use super::super::error::ParseError;
use super::super::types::{Field, MetadataRecord};
use super::super::util::parse_number;
use super::{EditSurface, EditValue};

/// Apply every non-`Keep` field of `surface` to `record`.
///
/// - Text fields are a bulk set: the same literal value for every record.
/// - Numeric fields: `""` clears, otherwise the text must parse. A bad number is
///   reported and that one field is skipped; the other fields still apply.
/// - Filename is not touched here (see [`EditSurface::pending_filename`]).
pub fn apply_fields(surface: &EditSurface, record: &mut MetadataRecord) -> Vec<ParseError> {
    let mut errors = Vec::new();
    let tags = &mut record.tags;

    apply_text(&mut tags.title, &surface.title);
    apply_text(&mut tags.artist, &surface.artist);
    apply_text(&mut tags.album, &surface.album);
    apply_text(&mut tags.album_artist, &surface.album_artist);
    apply_text(&mut tags.composer, &surface.composer);
    apply_text(&mut tags.genre, &surface.genre);
    apply_text(&mut tags.comment, &surface.comment);

    if let Err(e) = apply_number(&mut tags.year, &surface.year, Field::Year) {
        errors.push(e);
    }
    if let Err(e) = apply_number(&mut tags.track, &surface.track, Field::Track) {
        errors.push(e);
    }

    if let EditValue::Value(art) = &surface.album_art {
        if tags.album_art != *art {
            tags.album_art = art.clone();
        }
    }

    if !errors.is_empty() {
        debug!(
            path = %record.path().display(),
            failed = errors.len(),
            "some fields were not applied"
        );
    }
    errors
}

fn apply_text(dst: &mut String, edit: &EditValue<String>) {
    if let EditValue::Value(v) = edit {
        if dst != v {
            dst.clone_from(v);
        }
    }
}

fn apply_number(
    dst: &mut Option<u32>,
    edit: &EditValue<String>,
    field: Field,
) -> Result<(), ParseError> {
    if let EditValue::Value(text) = edit {
        *dst = parse_number(field, text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::super::aggregate;
    use super::*;
    use crate::core::types::{AlbumArt, TagFields};

    fn rec(name: &str, tags: TagFields) -> MetadataRecord {
        MetadataRecord::new(PathBuf::from(format!("/m/{name}")), tags, 60, 100)
    }

    fn sample() -> Vec<MetadataRecord> {
        vec![
            rec(
                "a.mp3",
                TagFields {
                    title: "Aerodynamic".to_string(),
                    artist: "Daft Punk".to_string(),
                    year: Some(2001),
                    track: Some(2),
                    ..TagFields::default()
                },
            ),
            rec(
                "b.mp3",
                TagFields {
                    title: "Digital Love".to_string(),
                    artist: "Daft Punk".to_string(),
                    year: Some(2001),
                    track: Some(3),
                    album_art: Some(AlbumArt {
                        data: vec![9],
                        mime_type: "image/png".to_string(),
                    }),
                    ..TagFields::default()
                },
            ),
        ]
    }

    #[test]
    fn applying_the_aggregate_changes_nothing() {
        let mut rs = sample();
        let before = rs.clone();
        let surface = aggregate(&rs).unwrap();
        for r in rs.iter_mut() {
            assert!(apply_fields(&surface, r).is_empty());
        }
        assert_eq!(rs, before);
    }

    #[test]
    fn keep_fields_are_left_alone() {
        let mut rs = sample();
        let mut surface = aggregate(&rs).unwrap();
        assert!(surface.title.is_keep());
        surface.album = EditValue::Value("Discovery".to_string());

        for r in rs.iter_mut() {
            apply_fields(&surface, r);
        }
        assert_eq!(rs[0].tags.title, "Aerodynamic");
        assert_eq!(rs[1].tags.title, "Digital Love");
        assert_eq!(rs[0].tags.track, Some(2));
        assert_eq!(rs[1].tags.track, Some(3));
        assert!(rs.iter().all(|r| r.tags.album == "Discovery"));
        assert!(rs[1].tags.album_art.is_some());
    }

    #[test]
    fn bad_year_fails_only_that_field() {
        let mut r = rec("a.mp3", TagFields::default());
        let surface = EditSurface {
            year: EditValue::Value("abc".to_string()),
            title: EditValue::Value("One More Time".to_string()),
            track: EditValue::Value("1".to_string()),
            ..EditSurface::default()
        };
        let errors = apply_fields(&surface, &mut r);
        assert_eq!(
            errors,
            vec![ParseError {
                field: Field::Year,
                text: "abc".to_string()
            }]
        );
        assert_eq!(r.tags.title, "One More Time");
        assert_eq!(r.tags.track, Some(1));
        assert_eq!(r.tags.year, None);
    }

    #[test]
    fn empty_number_clears() {
        let mut r = rec(
            "a.mp3",
            TagFields {
                year: Some(1999),
                ..TagFields::default()
            },
        );
        let surface = EditSurface {
            year: EditValue::Value(String::new()),
            ..EditSurface::default()
        };
        assert!(apply_fields(&surface, &mut r).is_empty());
        assert_eq!(r.tags.year, None);
    }

    #[test]
    fn literal_keep_text_is_just_text() {
        let mut r = rec("a.mp3", TagFields::default());
        let surface = EditSurface {
            comment: EditValue::Value("<keep>".to_string()),
            ..EditSurface::default()
        };
        apply_fields(&surface, &mut r);
        assert_eq!(r.tags.comment, "<keep>");
    }

    #[test]
    fn album_art_can_be_removed() {
        let mut rs = sample();
        let surface = EditSurface::album_art_only(None);
        for r in rs.iter_mut() {
            apply_fields(&surface, r);
        }
        assert!(rs.iter().all(|r| r.tags.album_art.is_none()));
        assert_eq!(rs[0].tags.title, "Aerodynamic");
    }
}
