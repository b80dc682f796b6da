//! Slot-indexed save records and their storage backends.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use game_core::{MapId, Position};
use serde::{Deserialize, Serialize};

use super::error::{RepositoryError, Result};

/// One of the fixed save slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot(u8);

impl Slot {
    pub const COUNT: u8 = 3;

    /// `None` for indices beyond the fixed slot count.
    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Slot> {
        (0..Self::COUNT).map(Slot)
    }
}

/// Everything needed to restore a session. The record is the sole source of
/// truth on load: active map and position are applied directly, nothing is
/// replayed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub map_id: MapId,
    pub player: Position,
    pub items: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// Storage backend for save slots.
pub trait SaveRepository: Send + Sync {
    fn save(&self, slot: Slot, record: &SaveData) -> Result<()>;

    fn load(&self, slot: Slot) -> Result<Option<SaveData>>;

    fn delete(&self, slot: Slot) -> Result<()>;

    /// All slots in order; `None` marks an empty slot.
    fn list(&self) -> Result<Vec<Option<SaveData>>> {
        Slot::all().map(|slot| self.load(slot)).collect()
    }
}

/// File-based implementation of [`SaveRepository`].
///
/// Each slot is one human-readable JSON document, written via a temp file and
/// an atomic rename so a crash never leaves a half-written save behind.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Platform save directory (e.g. `~/.local/share/praeverse/saves`).
    pub fn default_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "praeverse")
            .map(|dirs| dirs.data_dir().join("saves"))
    }

    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.base_dir.join(format!("slot_{}.json", slot.index()))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, slot: Slot, record: &SaveData) -> Result<()> {
        let path = self.slot_path(slot);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!(slot = slot.index(), "saved to {}", path.display());
        Ok(())
    }

    fn load(&self, slot: Slot) -> Result<Option<SaveData>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let record = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;
        Ok(Some(record))
    }

    fn delete(&self, slot: Slot) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(slot = slot.index(), "deleted save");
        }
        Ok(())
    }
}

/// In-memory [`SaveRepository`] for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemorySaveRepository {
    slots: Mutex<HashMap<Slot, SaveData>>,
}

impl InMemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn save(&self, slot: Slot, record: &SaveData) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        slots.insert(slot, record.clone());
        Ok(())
    }

    fn load(&self, slot: Slot) -> Result<Option<SaveData>> {
        let slots = self.slots.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slots.get(&slot).cloned())
    }

    fn delete(&self, slot: Slot) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        slots.remove(&slot);
        Ok(())
    }
}
