//! Persistence for save slots and settings.

mod error;
mod saves;
mod settings;

pub use error::{RepositoryError, Result};
pub use saves::{FileSaveRepository, InMemorySaveRepository, SaveData, SaveRepository, Slot};
pub use settings::SettingsStore;
