//! cli/convert.rs
//! `ftt` (filename -> tag) and `ttf` (tag -> filename).

use batchtag::config::Settings;
use batchtag::core::batch::{self, BatchReport};
use batchtag::core::rename::FsRenamer;
use batchtag::core::tags::Id3TagIo;
use batchtag::core::types::MetadataRecord;

use super::{CliError, SelectionArgs};

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Format string, e.g. "%artist%- %title%"
    #[arg(short, long, conflicts_with = "preset")]
    pub format: Option<String>,

    /// Use preset N from `batchtag formats`
    #[arg(short, long)]
    pub preset: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
pub enum Direction {
    FilenameToTag,
    TagToFilename,
}

/// `--format`, else `--preset`, else the pattern last configured for this direction.
pub(crate) fn pattern(
    args: &ConvertArgs,
    settings: &Settings,
    direction: Direction,
) -> Result<String, CliError> {
    if let Some(f) = &args.format {
        return Ok(f.clone());
    }
    if let Some(i) = args.preset {
        return settings
            .format_presets
            .get(i)
            .cloned()
            .ok_or(CliError::UnknownPreset(i));
    }
    Ok(match direction {
        Direction::FilenameToTag => settings.filename_to_tag_format.clone(),
        Direction::TagToFilename => settings.tag_to_filename_format.clone(),
    })
}

pub(crate) fn filename_to_tag(
    pattern: &str,
    records: &mut [MetadataRecord],
) -> Result<BatchReport, CliError> {
    let report = batch::filename_to_tag(pattern, records.iter_mut(), &Id3TagIo)?;
    println!(
        "Converted {} out of {} filenames to tags successfully.",
        report.succeeded, report.attempted
    );
    Ok(report)
}

pub(crate) fn tag_to_filename(
    pattern: &str,
    records: &mut [MetadataRecord],
) -> Result<BatchReport, CliError> {
    let report = batch::tag_to_filename(pattern, records.iter_mut(), &FsRenamer)?;
    println!(
        "Converted {} out of {} tags to filenames successfully.",
        report.succeeded, report.attempted
    );
    Ok(report)
}
