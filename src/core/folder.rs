//! core/folder.rs
//! The open music folder: owns the in-memory records for one session.
//!
//! Batch commands only ever borrow records from here.
//! Settings changes arrive through [`MusicFolder::on_settings_changed`], called directly
//! by whoever owns the settings.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::info;

use super::search::Query;
use super::tags::TagIo;
use super::types::MetadataRecord;
use crate::config::Settings;

#[derive(Debug, Default)]
pub struct MusicFolder {
    path: Option<PathBuf>,
    include_subfolders: bool,
    records: Vec<MetadataRecord>,
}

impl MusicFolder {
    pub fn new(include_subfolders: bool) -> Self {
        Self {
            include_subfolders,
            ..Self::default()
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn include_subfolders(&self) -> bool {
        self.include_subfolders
    }

    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [MetadataRecord] {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<MetadataRecord> {
        self.records
    }

    /// Open `path` and load it. Returns the number of tag read failures.
    pub fn open(&mut self, path: PathBuf, io: &impl TagIo) -> Result<usize, std::io::Error> {
        self.path = Some(path);
        self.reload(io)
    }

    /// Re-scan the open folder. Previous records (and any selection over them) are dropped.
    pub fn reload(&mut self, io: &impl TagIo) -> Result<usize, std::io::Error> {
        self.records.clear();
        let Some(path) = &self.path else {
            return Ok(0);
        };

        let (records, failures) = super::scan_and_read(path, self.include_subfolders, io)?;
        info!(
            folder = %path.display(),
            records = records.len(),
            failures,
            "loaded music folder"
        );
        self.records = records;
        Ok(failures)
    }

    pub fn close(&mut self) {
        self.path = None;
        self.records.clear();
    }

    /// Apply new settings. Reloads (and returns `true`) when the scan scope changed.
    pub fn on_settings_changed(
        &mut self,
        settings: &Settings,
        io: &impl TagIo,
    ) -> Result<bool, std::io::Error> {
        if settings.include_subfolders == self.include_subfolders {
            return Ok(false);
        }
        self.include_subfolders = settings.include_subfolders;
        self.reload(io)?;
        Ok(true)
    }

    /// Indices of the records matching `query`, in folder order.
    /// Feed them to [`MusicFolder::selection`].
    pub fn search(&self, query: &Query) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| query.matches(r))
            .map(|(i, _)| i)
            .collect()
    }

    /// Selected records in folder order. Stale indices are dropped, duplicates merged.
    pub fn selection(&self, indices: &[usize]) -> Vec<&MetadataRecord> {
        let wanted: BTreeSet<usize> = indices.iter().copied().collect();
        wanted
            .into_iter()
            .filter_map(|i| self.records.get(i))
            .collect()
    }

    /// Mutable view of [`MusicFolder::selection`], for batch commands.
    pub fn selection_mut(&mut self, indices: &[usize]) -> Vec<&mut MetadataRecord> {
        let wanted: BTreeSet<usize> = indices.iter().copied().collect();
        self.records
            .iter_mut()
            .enumerate()
            .filter(|(i, _)| wanted.contains(i))
            .map(|(_, r)| r)
            .collect()
    }
}
