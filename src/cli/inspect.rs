//! cli/inspect.rs
//! `show`: print the aggregated edit surface for a selection.

use batchtag::core::edit::{EditValue, aggregate};
use batchtag::core::human::{format_duration, format_file_size};
use batchtag::core::types::MetadataRecord;

const KEEP: &str = "<keep>";

pub(crate) fn show(records: &[MetadataRecord]) {
    let Some(surface) = aggregate(records) else {
        println!("No files selected.");
        return;
    };

    fn text(v: &EditValue<String>) -> &str {
        match v {
            EditValue::Keep => KEEP,
            EditValue::Value(s) => s,
        }
    }

    println!("{} file(s) selected", surface.record_count);
    if surface.record_count == 1 {
        println!("Path:         {}", records[0].path().display());
    }

    let filename = text(&surface.filename.value);
    if surface.filename.editable {
        println!("Filename:     {filename}");
    } else {
        println!("Filename:     {filename} (read-only for multiple files)");
    }

    let rows = [
        ("Title", &surface.title),
        ("Artist", &surface.artist),
        ("Album", &surface.album),
        ("Year", &surface.year),
        ("Track", &surface.track),
        ("Album Artist", &surface.album_artist),
        ("Composer", &surface.composer),
        ("Genre", &surface.genre),
        ("Comment", &surface.comment),
    ];
    for (label, value) in rows {
        println!("{:<13} {}", format!("{label}:"), text(value));
    }

    let art = match &surface.album_art {
        EditValue::Keep => KEEP.to_string(),
        EditValue::Value(None) => "none".to_string(),
        EditValue::Value(Some(art)) => match art.dimensions() {
            Ok((w, h)) => format!("{} ({w}x{h})", art.mime_type),
            Err(_) => format!("{} (undecodable)", art.mime_type),
        },
    };
    println!("Album Art:    {art}");
    println!("Duration:     {}", format_duration(surface.total_duration));
    println!("File Size:    {}", format_file_size(surface.total_file_size));
}
