//! Settings persistence: one JSON document, defaults when absent.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::Settings;

use super::error::{RepositoryError, Result};

/// Loads and stores the [`Settings`] document.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Platform settings path (e.g. `~/.config/praeverse/settings.json`).
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "praeverse")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Missing file means a first run: defaults, not an error.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let bytes = fs::read(&self.path)?;
        serde_json::from_slice(&bytes).map_err(|e| RepositoryError::CorruptedData(e.to_string()))
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(settings)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::SpeedPreset;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        let settings = Settings {
            movement: SpeedPreset::Fast,
            animate_dialogue: false,
            ..Settings::default()
        };
        store.save(&settings).unwrap();

        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn malformed_files_are_rejected_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, b"[1, 2, 3]").unwrap();

        let err = SettingsStore::new(&path).load().unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptedData(_)));
    }
}
