//! core/mod.rs
//!
//! The engine behind batchtag:
//! - Discover audio file paths (filesystem walk)
//! - Read records (tags + file stats) through the tag collaborator
//! - Format strings: filename <-> tag transcoding
//! - Batch editing: aggregate a selection, apply edits back
//!
//! The scan pipeline stays explicit:
//!   (A) discover paths -> Vec<PathBuf>
//!   (B) read records -> Vec<MetadataRecord>

pub mod batch;
pub mod edit;
pub mod error;
pub mod folder;
pub mod format;
pub mod human;
pub mod library;
pub mod probe;
pub mod rename;
pub mod search;
pub mod tags;
pub mod types;

mod util;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use tags::TagIo;
use types::{MetadataRecord, TagFields};

/// Discover audio files under multiple roots.
///
/// - De-dupes across overlapping roots by full path
/// - Sorts paths once (core owns ordering, callers shouldn't)
pub fn scan_paths(roots: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut seen: HashSet<PathBuf> = HashSet::with_capacity(1024);
    let mut out: Vec<PathBuf> = Vec::new();

    for root in roots {
        let paths = library::scan_audio_files(root, recursive)?;
        for path in paths {
            if seen.insert(path.clone()) {
                out.push(path);
            }
        }
    }

    out.sort();
    Ok(out)
}

/// Read one record. Returns (record, tag_read_failed).
///
/// Never fails hard: an unreadable tag gives a record with empty fields so the file
/// still shows up (and can be re-tagged).
pub fn read_record(path: PathBuf, io: &impl TagIo) -> (MetadataRecord, bool) {
    let (tags, failed) = match io.read_tag(&path) {
        Ok(tags) => (tags, false),
        Err(e) => {
            warn!(%e, "tag read failed");
            (TagFields::default(), true)
        }
    };

    let duration = probe::probe_duration(&path)
        .or_else(|| tags::read_tag_length(&path))
        .unwrap_or(0);
    let size = probe::file_size(&path);

    debug!(path = %path.display(), duration, size, "read record");
    (MetadataRecord::new(path, tags, duration, size), failed)
}

/// Read records for a set of already-discovered paths.
/// Returns (records, tag_failures).
pub fn read_records(paths: Vec<PathBuf>, io: &impl TagIo) -> (Vec<MetadataRecord>, usize) {
    let mut records: Vec<MetadataRecord> = Vec::with_capacity(paths.len());
    let mut tag_failures: usize = 0;

    for path in paths {
        let (record, failed) = read_record(path, io);
        if failed {
            tag_failures += 1;
        }
        records.push(record);
    }

    (records, tag_failures)
}

/// Convenience for callers that have a single root.
pub fn scan_and_read(
    root: &Path,
    recursive: bool,
    io: &impl TagIo,
) -> Result<(Vec<MetadataRecord>, usize), std::io::Error> {
    let paths = scan_paths(&[root.to_path_buf()], recursive)?;
    Ok(read_records(paths, io))
}
