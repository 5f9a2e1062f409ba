//! core/rename.rs
//! Filesystem rename collaborator.

use std::path::Path;

use super::error::RenameError;

pub trait Renamer {
    /// Move `from` to `to`. Must fail with `PathCollision` instead of overwriting.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), RenameError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsRenamer;

impl Renamer for FsRenamer {
    fn rename(&self, from: &Path, to: &Path) -> Result<(), RenameError> {
        // On a case-insensitive filesystem `A.mp3` "exists" when renaming `a.mp3`.
        if to.exists() && !same_file(from, to) {
            return Err(RenameError::PathCollision(to.to_path_buf()));
        }
        std::fs::rename(from, to).map_err(|source| RenameError::Io {
            from: from.to_path_buf(),
            source,
        })
    }
}

/// Whether both paths name the same file on disk.
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (std::fs::metadata(a), std::fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
