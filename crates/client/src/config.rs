//! Client configuration from process environment variables.

use std::env;
use std::path::PathBuf;

use runtime::{FileSaveRepository, SettingsStore};

/// Configuration required to bootstrap the client.
///
/// Environment variables:
/// - `PRAEVERSE_SAVE_DIR` - Directory for save slots (default: platform data dir)
/// - `PRAEVERSE_SETTINGS_PATH` - Settings file (default: platform config dir)
/// - `PRAEVERSE_LOG_DIR` - Log directory (default: platform data dir)
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub save_dir: Option<PathBuf>,
    pub settings_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            save_dir: env::var("PRAEVERSE_SAVE_DIR").ok().map(PathBuf::from),
            settings_path: env::var("PRAEVERSE_SETTINGS_PATH").ok().map(PathBuf::from),
            log_dir: env::var("PRAEVERSE_LOG_DIR").ok().map(PathBuf::from),
        }
    }

    pub fn save_dir(&self) -> PathBuf {
        self.save_dir
            .clone()
            .or_else(FileSaveRepository::default_dir)
            .unwrap_or_else(|| PathBuf::from("saves"))
    }

    pub fn settings_path(&self) -> PathBuf {
        self.settings_path
            .clone()
            .or_else(SettingsStore::default_path)
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("", "", "praeverse")
                    .map(|dirs| dirs.data_dir().join("logs"))
            })
            .unwrap_or_else(|| PathBuf::from("logs"))
    }
}
