//! cli/edit.rs
//! `set` and `remove`.
//!
//! `set` starts from a surface that keeps everything; each flag replaces one field.

use std::path::PathBuf;

use batchtag::core::batch::{BatchReport, remove_tags, save_tags};
use batchtag::core::edit::{EditSurface, EditValue, FilenameEdit};
use batchtag::core::rename::FsRenamer;
use batchtag::core::tags::Id3TagIo;
use batchtag::core::types::{AlbumArt, MetadataRecord};

use super::{CliError, SelectionArgs};

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// New filename (single file only)
    #[arg(long)]
    pub filename: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub artist: Option<String>,
    #[arg(long)]
    pub album: Option<String>,
    /// Year; "" clears it
    #[arg(long)]
    pub year: Option<String>,
    /// Track number; "" clears it
    #[arg(long)]
    pub track: Option<String>,
    #[arg(long)]
    pub album_artist: Option<String>,
    #[arg(long)]
    pub composer: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long)]
    pub comment: Option<String>,

    /// Embed this image (jpg/png) as album art
    #[arg(long, conflicts_with = "remove_art")]
    pub art: Option<PathBuf>,
    /// Remove embedded album art
    #[arg(long)]
    pub remove_art: bool,
}

fn overwrite(flag: &Option<String>, field: &mut EditValue<String>) {
    if let Some(v) = flag {
        *field = EditValue::Value(v.clone());
    }
}

pub(crate) fn set(args: &SetArgs, records: &mut [MetadataRecord]) -> Result<BatchReport, CliError> {
    if records.is_empty() {
        return Err(CliError::EmptySelection);
    }

    let mut surface = if let Some(path) = &args.art {
        EditSurface::album_art_only(Some(AlbumArt::from_image_file(path)?))
    } else if args.remove_art {
        EditSurface::album_art_only(None)
    } else {
        EditSurface::default()
    };
    surface.record_count = records.len();

    if let Some(name) = &args.filename {
        if records.len() != 1 {
            return Err(CliError::FilenameNeedsOneFile(records.len()));
        }
        surface.filename = FilenameEdit {
            value: EditValue::Value(name.clone()),
            editable: true,
        };
    }

    overwrite(&args.title, &mut surface.title);
    overwrite(&args.artist, &mut surface.artist);
    overwrite(&args.album, &mut surface.album);
    overwrite(&args.year, &mut surface.year);
    overwrite(&args.track, &mut surface.track);
    overwrite(&args.album_artist, &mut surface.album_artist);
    overwrite(&args.composer, &mut surface.composer);
    overwrite(&args.genre, &mut surface.genre);
    overwrite(&args.comment, &mut surface.comment);

    let report = save_tags(&surface, records.iter_mut(), &Id3TagIo, &FsRenamer);
    println!("Saved tags: {report}.");
    Ok(report)
}

pub(crate) fn remove(records: &mut [MetadataRecord]) -> BatchReport {
    let report = remove_tags(records.iter_mut(), &Id3TagIo);
    println!("Removed tags: {report}.");
    report
}
