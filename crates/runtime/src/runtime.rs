//! Runtime orchestrator: bootstrap validation and worker spawning.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use game_core::{MapRegistry, Session, Settings};

use crate::error::Result;
use crate::events::EventBus;
use crate::handle::RuntimeHandle;
use crate::repository::{InMemorySaveRepository, SaveRepository};
use crate::workers::session::SessionWorker;

/// Configuration required to start a session runtime.
pub struct RuntimeConfig {
    pub registry: MapRegistry,
    pub settings: Settings,
    pub saves: Arc<dyn SaveRepository>,
    /// Command queue depth between handle and worker.
    pub command_buffer: usize,
}

impl RuntimeConfig {
    /// Defaults: default settings, in-memory saves, a small command queue.
    pub fn new(registry: MapRegistry) -> Self {
        Self {
            registry,
            settings: Settings::default(),
            saves: Arc::new(InMemorySaveRepository::new()),
            command_buffer: 16,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_saves(mut self, saves: Arc<dyn SaveRepository>) -> Self {
        self.saves = saves;
        self
    }
}

/// Entry point: validates the authored map set and spawns the session worker.
pub struct Runtime;

impl Runtime {
    /// Starts the session worker and returns the handle to it.
    ///
    /// Fails before anything spawns when a door targets an unregistered map:
    /// that is an authoring bug and must surface loudly at bootstrap, not
    /// mid-play. Must be called from within a tokio runtime.
    pub fn start(config: RuntimeConfig) -> Result<RuntimeHandle> {
        config.registry.validate()?;

        let (command_tx, command_rx) = mpsc::channel(config.command_buffer);
        let (settings_tx, settings_rx) = watch::channel(config.settings);
        let bus = EventBus::new();

        let session = Session::new(config.registry);
        let worker = SessionWorker::new(session, command_rx, settings_rx, bus.clone(), config.saves);
        tokio::spawn(worker.run());

        Ok(RuntimeHandle::new(command_tx, bus, Arc::new(settings_tx)))
    }
}
