//! Settings persistence (`<config_dir>/batchtag/config.toml`).
//!
//! A missing file is not an error: defaults are used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scan subfolders when opening a music folder.
    pub include_subfolders: bool,
    pub remember_last_folder: bool,
    pub last_opened_folder: Option<PathBuf>,

    /// Pattern used by filename -> tag.
    pub filename_to_tag_format: String,
    /// Pattern used by tag -> filename.
    pub tag_to_filename_format: String,
    /// Patterns offered to the user.
    pub format_presets: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include_subfolders: true,
            remember_last_folder: true,
            last_opened_folder: None,
            filename_to_tag_format: "%artist%- %title%".to_string(),
            tag_to_filename_format: "%artist%- %title%".to_string(),
            format_presets: vec![
                "%artist%- %title%".to_string(),
                "%title%- %artist%".to_string(),
                "%title%".to_string(),
            ],
        }
    }
}

impl Settings {
    /// Platform default location, e.g. `~/.config/batchtag/config.toml` on Linux.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|d| d.join("batchtag").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let mut settings: Settings = toml::from_str(&text)?;
                settings.normalize();
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Record the folder that was just opened (or closed, with `None`).
    pub fn remember_folder(&mut self, folder: Option<&Path>) {
        if self.remember_last_folder {
            self.last_opened_folder = folder.map(Path::to_path_buf);
        }
    }

    /// Forgetting is immediate: turning the option off drops the stored folder.
    pub fn normalize(&mut self) {
        if !self.remember_last_folder {
            self.last_opened_folder = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.format_presets.len(), 3);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut s = Settings::default();
        s.include_subfolders = false;
        s.tag_to_filename_format = "%track%. %title%".to_string();
        s.remember_folder(Some(Path::new("/music")));
        s.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, s);
        assert_eq!(loaded.last_opened_folder, Some(PathBuf::from("/music")));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "include_subfolders = false\n").unwrap();

        let s = Settings::load(&path).unwrap();
        assert!(!s.include_subfolders);
        assert_eq!(s.filename_to_tag_format, "%artist%- %title%");
    }

    #[test]
    fn disabling_remember_forgets_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "remember_last_folder = false\nlast_opened_folder = \"/music\"\n",
        )
        .unwrap();

        let s = Settings::load(&path).unwrap();
        assert_eq!(s.last_opened_folder, None);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "include_subfolders = [").unwrap();
        assert!(matches!(Settings::load(&path), Err(ConfigError::Parse(_))));
    }
}
