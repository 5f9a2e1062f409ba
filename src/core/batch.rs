//! core/batch.rs
//! Batch commands over a selection: save, filename -> tag, tag -> filename, remove.
//!
//! Every command follows the same rules:
//! - records are processed one at a time, in selection order
//! - one record failing never stops the batch and never rolls back its siblings
//! - the caller gets a [`BatchReport`] ("X of Y succeeded" + structured failures)
//! - a bad format string is reported once, before any record is touched

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::edit::{EditSurface, apply_fields};
use super::error::{BatchError, FormatError, RenameError};
use super::format::{compile, match_filename, render, sanitize_filename};
use super::rename::Renamer;
use super::tags::TagIo;
use super::types::{MetadataRecord, TagFields};

#[derive(Debug)]
pub struct RecordFailure {
    pub path: PathBuf,
    pub error: BatchError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub attempted: usize,
    pub succeeded: usize,
    /// A record may appear more than once (e.g. a bad year *and* a failed write).
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.attempted
    }

    fn record(&mut self, path: &Path, errors: Vec<BatchError>) {
        self.attempted += 1;
        if errors.is_empty() {
            self.succeeded += 1;
            return;
        }
        for error in errors {
            warn!(path = %path.display(), %error, "record failed");
            self.failures.push(RecordFailure {
                path: path.to_path_buf(),
                error,
            });
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} succeeded", self.succeeded, self.attempted)
    }
}

/// Apply an edit surface to every record, then persist each one.
///
/// The filename is only changed when the surface is editable (single record).
pub fn save_tags<'a, I>(
    surface: &EditSurface,
    records: I,
    io: &impl TagIo,
    renamer: &impl Renamer,
) -> BatchReport
where
    I: IntoIterator<Item = &'a mut MetadataRecord>,
{
    let mut report = BatchReport::default();

    for record in records {
        let mut errors: Vec<BatchError> = Vec::new();

        if let Some(new_name) = surface.pending_filename(record).map(sanitize_filename) {
            if let Err(e) = rename_record(record, &new_name, renamer) {
                errors.push(e.into());
            }
        }

        errors.extend(apply_fields(surface, record).into_iter().map(BatchError::from));

        if let Err(e) = io.write_tag(record.path(), &record.tags) {
            errors.push(e.into());
        }

        debug!(path = %record.path().display(), errors = errors.len(), "saved");
        report.record(record.path(), errors);
    }

    info!("save tags: {report}");
    report
}

/// Parse tag values out of each record's filename and persist them.
pub fn filename_to_tag<'a, I>(
    pattern: &str,
    records: I,
    io: &impl TagIo,
) -> Result<BatchReport, FormatError>
where
    I: IntoIterator<Item = &'a mut MetadataRecord>,
{
    let format = compile(pattern)?;
    let mut report = BatchReport::default();

    for record in records {
        let mut errors: Vec<BatchError> = Vec::new();

        match match_filename(&format, record.filename()) {
            Ok(update) => {
                update.apply_to(&mut record.tags);
                if let Err(e) = io.write_tag(record.path(), &record.tags) {
                    errors.push(e.into());
                }
            }
            Err(e) => errors.push(e.into()),
        }

        report.record(record.path(), errors);
    }

    info!(pattern = %pattern, "filename to tag: {report}");
    Ok(report)
}

/// Rename each record's file from its tag values. The extension is kept.
pub fn tag_to_filename<'a, I>(
    pattern: &str,
    records: I,
    renamer: &impl Renamer,
) -> Result<BatchReport, FormatError>
where
    I: IntoIterator<Item = &'a mut MetadataRecord>,
{
    let format = compile(pattern)?;
    let mut report = BatchReport::default();

    for record in records {
        let stem = render(&format, record);
        let new_name = match record.extension() {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem.clone(),
        };

        let errors: Vec<BatchError> = if stem.trim().is_empty() {
            vec![RenameError::EmptyName.into()]
        } else {
            match rename_record(record, &new_name, renamer) {
                Ok(_) => Vec::new(),
                Err(e) => vec![e.into()],
            }
        };

        report.record(record.path(), errors);
    }

    info!(pattern = %pattern, "tag to filename: {report}");
    Ok(report)
}

/// Strip the tag from every record's file. Successful records end up with empty fields.
pub fn remove_tags<'a, I>(records: I, io: &impl TagIo) -> BatchReport
where
    I: IntoIterator<Item = &'a mut MetadataRecord>,
{
    let mut report = BatchReport::default();

    for record in records {
        let errors: Vec<BatchError> = match io.remove_tag(record.path()) {
            Ok(()) => {
                record.tags = TagFields::default();
                Vec::new()
            }
            Err(e) => vec![e.into()],
        };
        report.record(record.path(), errors);
    }

    info!("remove tags: {report}");
    report
}

/// Move `record`'s file to `new_filename` in the same folder.
///
/// Returns `Ok(false)` when the name is unchanged. On error the record is untouched.
pub fn rename_record(
    record: &mut MetadataRecord,
    new_filename: &str,
    renamer: &impl Renamer,
) -> Result<bool, RenameError> {
    if new_filename.trim().is_empty() {
        return Err(RenameError::EmptyName);
    }
    let target = record.path().with_file_name(new_filename);
    if target == record.path() {
        return Ok(false);
    }

    renamer.rename(record.path(), &target)?;
    debug!(from = %record.path().display(), to = %target.display(), "renamed");
    record.set_path(target);
    Ok(true)
}
