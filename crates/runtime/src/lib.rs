//! Session orchestration for the tile world.
//!
//! This crate wires the pure `game-core` state machine to wall-clock pacing,
//! persistence, and event delivery. Consumers start a [`runtime::Runtime`]
//! and interact through [`RuntimeHandle`]: activations go in as commands,
//! state changes come back on a topic-based broadcast [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and its configuration
//! - [`handle`] exposes the command surface downstream clients use
//! - [`events`] provides the topic-based event bus
//! - [`repository`] persists save slots and settings
//! - `workers` keeps the session task internal to the crate
pub mod error;
pub mod events;
pub mod handle;
pub mod repository;
pub mod runtime;

mod workers;

pub use error::{Result, RuntimeError};
pub use events::{DialogueEvent, Event, EventBus, SessionEvent, Topic};
pub use handle::{RuntimeHandle, SessionSnapshot};
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveData, SaveRepository,
    SettingsStore, Slot,
};
pub use runtime::{Runtime, RuntimeConfig};
