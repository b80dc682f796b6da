//! Runtime errors.

use game_core::RegistryError;

use crate::repository::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The session worker is no longer running (shutdown or crashed).
    #[error("session worker is gone")]
    WorkerGone,

    /// Map lookup failed: an authoring or save-data error, never produced
    /// by correctly authored content that passed bootstrap validation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("save slot {0} is empty")]
    EmptySlot(u8),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
