//! core/edit/aggregate.rs
//! Selection -> EditSurface ("mixed selection" semantics).

use super::super::types::MetadataRecord;
use super::{EditSurface, EditValue, FilenameEdit};

/// Reduce a selection to one edit surface.
///
/// - Each field: the first record's value if every record agrees, else `Keep`.
/// - Filename: editable only for a single record (N files cannot share one name).
/// - Duration and size: summed, never compared.
///
/// Returns `None` for an empty selection.
pub fn aggregate<'a, I>(records: I) -> Option<EditSurface>
where
    I: IntoIterator<Item = &'a MetadataRecord>,
{
    let records: Vec<&MetadataRecord> = records.into_iter().collect();
    let first = *records.first()?;

    fn common<T: PartialEq + Clone>(
        records: &[&MetadataRecord],
        get: impl Fn(&MetadataRecord) -> &T,
    ) -> EditValue<T> {
        let first = get(records[0]);
        if records.iter().all(|r| get(r) == first) {
            EditValue::Value(first.clone())
        } else {
            EditValue::Keep
        }
    }

    fn number_text(n: &Option<u32>) -> String {
        n.map(|n| n.to_string()).unwrap_or_default()
    }

    let single = records.len() == 1;

    Some(EditSurface {
        filename: FilenameEdit {
            value: if single {
                EditValue::Value(first.filename().to_string())
            } else {
                EditValue::Keep
            },
            editable: single,
        },

        title: common(&records, |r| &r.tags.title),
        artist: common(&records, |r| &r.tags.artist),
        album: common(&records, |r| &r.tags.album),
        year: common(&records, |r| &r.tags.year).map(|n| number_text(&n)),
        track: common(&records, |r| &r.tags.track).map(|n| number_text(&n)),
        album_artist: common(&records, |r| &r.tags.album_artist),
        composer: common(&records, |r| &r.tags.composer),
        genre: common(&records, |r| &r.tags.genre),
        comment: common(&records, |r| &r.tags.comment),
        album_art: common(&records, |r| &r.tags.album_art),

        total_duration: records.iter().map(|r| r.duration()).sum(),
        total_file_size: records.iter().map(|r| r.file_size()).sum(),
        record_count: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::core::types::{AlbumArt, TagFields};

    fn rec(name: &str, tags: TagFields, duration: u64, size: u64) -> MetadataRecord {
        MetadataRecord::new(PathBuf::from(format!("/m/{name}")), tags, duration, size)
    }

    fn with_year(name: &str, year: u32) -> MetadataRecord {
        rec(
            name,
            TagFields {
                year: Some(year),
                ..TagFields::default()
            },
            0,
            0,
        )
    }

    #[test]
    fn empty_selection_has_no_surface() {
        assert_eq!(aggregate(&Vec::<MetadataRecord>::new()), None);
    }

    #[test]
    fn differing_year_is_keep() {
        let rs = vec![
            with_year("a.mp3", 2001),
            with_year("b.mp3", 2001),
            with_year("c.mp3", 2005),
        ];
        assert_eq!(aggregate(&rs).unwrap().year, EditValue::Keep);
    }

    #[test]
    fn common_year_is_value() {
        let rs = vec![with_year("a.mp3", 2001), with_year("b.mp3", 2001)];
        assert_eq!(
            aggregate(&rs).unwrap().year,
            EditValue::Value("2001".to_string())
        );
    }

    #[test]
    fn single_record_is_fully_editable() {
        let tags = TagFields {
            title: "One More Time".to_string(),
            track: None,
            ..TagFields::default()
        };
        let rs = vec![rec("a.mp3", tags, 320, 1000)];
        let s = aggregate(&rs).unwrap();

        assert!(s.filename.editable);
        assert_eq!(s.filename.value, EditValue::Value("a.mp3".to_string()));
        assert_eq!(s.title, EditValue::Value("One More Time".to_string()));
        assert_eq!(s.track, EditValue::Value(String::new()));
        assert_eq!(s.album_art, EditValue::Value(None));
        assert_eq!(s.total_duration, 320);
        assert_eq!(s.record_count, 1);
    }

    #[test]
    fn multi_selection_disables_filename_and_sums_stats() {
        let rs = vec![
            rec("a.mp3", TagFields::default(), 100, 1_000),
            rec("b.mp3", TagFields::default(), 200, 2_500),
        ];
        let s = aggregate(&rs).unwrap();
        assert!(!s.filename.editable);
        assert_eq!(s.filename.value, EditValue::Keep);
        assert_eq!(s.total_duration, 300);
        assert_eq!(s.total_file_size, 3_500);
        assert_eq!(s.title, EditValue::Value(String::new()));
    }

    #[test]
    fn album_artist_and_composer_reduce_independently() {
        let a = TagFields {
            album_artist: "Daft Punk".to_string(),
            composer: "Bangalter".to_string(),
            ..TagFields::default()
        };
        let b = TagFields {
            album_artist: "Daft Punk".to_string(),
            composer: "Homem-Christo".to_string(),
            ..TagFields::default()
        };
        let rs = vec![rec("a.mp3", a, 0, 0), rec("b.mp3", b, 0, 0)];
        let s = aggregate(&rs).unwrap();
        assert_eq!(s.album_artist, EditValue::Value("Daft Punk".to_string()));
        assert_eq!(s.composer, EditValue::Keep);
    }

    #[test]
    fn album_art_compares_content() {
        let art = |bytes: &[u8]| {
            Some(AlbumArt {
                data: bytes.to_vec(),
                mime_type: "image/png".to_string(),
            })
        };
        let with_art = |name: &str, album_art: Option<AlbumArt>| {
            let tags = TagFields {
                album_art,
                ..TagFields::default()
            };
            rec(name, tags, 0, 0)
        };

        let same = vec![with_art("a.mp3", art(&[1, 2])), with_art("b.mp3", art(&[1, 2]))];
        assert_eq!(aggregate(&same).unwrap().album_art, EditValue::Value(art(&[1, 2])));

        let differ = vec![with_art("a.mp3", art(&[1, 2])), with_art("b.mp3", None)];
        assert_eq!(aggregate(&differ).unwrap().album_art, EditValue::Keep);
    }
}
