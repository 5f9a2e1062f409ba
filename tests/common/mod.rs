//! In-memory collaborators for batch tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use batchtag::core::error::{RenameError, TagError};
use batchtag::core::rename::Renamer;
use batchtag::core::tags::TagIo;
use batchtag::core::types::{MetadataRecord, TagFields};

/// Tags keyed by path. Paths in `broken` fail every operation.
#[derive(Default)]
pub struct MemoryTags {
    pub stored: RefCell<HashMap<PathBuf, TagFields>>,
    pub broken: HashSet<PathBuf>,
}

impl MemoryTags {
    pub fn failing(paths: &[&str]) -> Self {
        Self {
            broken: paths.iter().map(PathBuf::from).collect(),
            ..Self::default()
        }
    }

    pub fn get(&self, path: &str) -> Option<TagFields> {
        self.stored.borrow().get(Path::new(path)).cloned()
    }

    fn check(&self, path: &Path) -> Result<(), TagError> {
        if self.broken.contains(path) {
            return Err(TagError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        Ok(())
    }
}

impl TagIo for MemoryTags {
    fn read_tag(&self, path: &Path) -> Result<TagFields, TagError> {
        self.check(path)?;
        Ok(self.stored.borrow().get(path).cloned().unwrap_or_default())
    }

    fn write_tag(&self, path: &Path, fields: &TagFields) -> Result<(), TagError> {
        self.check(path)?;
        self.stored
            .borrow_mut()
            .insert(path.to_path_buf(), fields.clone());
        Ok(())
    }

    fn remove_tag(&self, path: &Path) -> Result<(), TagError> {
        self.check(path)?;
        self.stored.borrow_mut().remove(path);
        Ok(())
    }
}

/// A fake filesystem holding only file names.
#[derive(Default)]
pub struct MemoryFs {
    pub files: RefCell<HashSet<PathBuf>>,
}

impl MemoryFs {
    pub fn with(paths: &[&str]) -> Self {
        Self {
            files: RefCell::new(paths.iter().map(PathBuf::from).collect()),
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.files.borrow().contains(Path::new(path))
    }
}

impl Renamer for MemoryFs {
    fn rename(&self, from: &Path, to: &Path) -> Result<(), RenameError> {
        let mut files = self.files.borrow_mut();
        if files.contains(to) {
            return Err(RenameError::PathCollision(to.to_path_buf()));
        }
        files.remove(from);
        files.insert(to.to_path_buf());
        Ok(())
    }
}

pub fn record(path: &str) -> MetadataRecord {
    MetadataRecord::new(PathBuf::from(path), TagFields::default(), 0, 0)
}

pub fn tagged(path: &str, f: impl FnOnce(&mut TagFields)) -> MetadataRecord {
    let mut tags = TagFields::default();
    f(&mut tags);
    MetadataRecord::new(PathBuf::from(path), tags, 0, 0)
}
