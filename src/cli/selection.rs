//! cli/selection.rs
//! Paths on the command line -> the records a command works on.
//!
//! - Files are taken as-is. Selection order is argument order.
//! - Folders are opened as a `MusicFolder` (recursion follows the settings).
//! - No paths: fall back to the last opened folder, if remembered.
//! - `--filter` narrows the result with a search query.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{info, warn};

use batchtag::config::Settings;
use batchtag::core::folder::MusicFolder;
use batchtag::core::library::is_audio;
use batchtag::core::read_record;
use batchtag::core::search::{self, Query};
use batchtag::core::tags::Id3TagIo;
use batchtag::core::types::MetadataRecord;

use super::{CliError, SelectionArgs};

pub(crate) fn load(
    args: &SelectionArgs,
    settings: &mut Settings,
) -> Result<Vec<MetadataRecord>, CliError> {
    let query: Option<Query> = args.filter.as_deref().map(search::parse).transpose()?;

    let paths: Vec<PathBuf> = if args.paths.is_empty() {
        match &settings.last_opened_folder {
            Some(folder) => {
                info!(folder = %folder.display(), "using last opened folder");
                vec![folder.clone()]
            }
            None => return Err(CliError::EmptySelection),
        }
    } else {
        args.paths.clone()
    };

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut records: Vec<MetadataRecord> = Vec::new();
    let mut failures = 0;

    for path in paths {
        if path.is_dir() {
            let mut folder = MusicFolder::new(settings.include_subfolders);
            failures += folder.open(path.clone(), &Id3TagIo)?;
            settings.remember_folder(Some(&path));

            let picked: Vec<MetadataRecord> = match &query {
                Some(q) => folder
                    .selection(&folder.search(q))
                    .into_iter()
                    .cloned()
                    .collect(),
                None => folder.into_records(),
            };
            for record in picked {
                if seen.insert(record.path().to_path_buf()) {
                    records.push(record);
                }
            }
        } else if !is_audio(&path) {
            warn!(path = %path.display(), "skipping unsupported file");
        } else if seen.insert(path.clone()) {
            let (record, failed) = read_record(path, &Id3TagIo);
            failures += usize::from(failed);
            if query.as_ref().is_none_or(|q| q.matches(&record)) {
                records.push(record);
            }
        }
    }

    if failures > 0 {
        warn!(failures, "some tags could not be read; those files show empty fields");
    }
    if records.is_empty() {
        return Err(match &args.filter {
            Some(filter) => CliError::NothingMatched(filter.clone()),
            None => CliError::EmptySelection,
        });
    }
    Ok(records)
}
