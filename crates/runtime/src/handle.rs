//! The command surface downstream clients hold.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use game_core::{Activation, MapId, Position, Settings};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::repository::{SaveData, Slot};
use crate::workers::session::Command;

/// Point-in-time view of the session, for initial renders and save panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub map: MapId,
    pub position: Position,
    pub items: Vec<String>,
    /// Currently visible dialogue text, if a dialogue is open.
    pub dialogue: Option<String>,
}

/// Cloneable handle to a running session worker.
///
/// Commands are processed strictly in delivery order; a navigation request
/// sent while a route is playing supersedes it atomically on arrival.
#[derive(Clone)]
pub struct RuntimeHandle {
    commands: mpsc::Sender<Command>,
    bus: EventBus,
    settings: Arc<watch::Sender<Settings>>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<Command>,
        bus: EventBus,
        settings: Arc<watch::Sender<Settings>>,
    ) -> Self {
        Self {
            commands,
            bus,
            settings,
        }
    }

    /// Submits a tile activation (the dispatcher runs on the worker side).
    pub async fn activate(&self, position: Position, activation: Activation) -> Result<()> {
        self.send(Command::Activate {
            position,
            activation,
        })
        .await
    }

    pub async fn close_dialogue(&self) -> Result<()> {
        self.send(Command::CloseDialogue).await
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot { reply }).await?;
        rx.await.map_err(|_| RuntimeError::WorkerGone)
    }

    pub async fn save(&self, slot: Slot) -> Result<SaveData> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Save { slot, reply }).await?;
        rx.await.map_err(|_| RuntimeError::WorkerGone)?
    }

    pub async fn load(&self, slot: Slot) -> Result<SessionSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Load { slot, reply }).await?;
        rx.await.map_err(|_| RuntimeError::WorkerGone)?
    }

    pub async fn delete_save(&self, slot: Slot) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::DeleteSave { slot, reply }).await?;
        rx.await.map_err(|_| RuntimeError::WorkerGone)?
    }

    pub async fn list_saves(&self) -> Result<Vec<Option<SaveData>>> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::ListSaves { reply }).await?;
        rx.await.map_err(|_| RuntimeError::WorkerGone)?
    }

    /// Publishes new settings. The worker reads the current value fresh at
    /// every scheduling decision, so a speed change lands on the next tick it
    /// arms.
    pub fn update_settings(&self, settings: Settings) {
        self.settings.send_replace(settings);
    }

    pub fn settings(&self) -> Settings {
        *self.settings.borrow()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.bus.subscribe_multiple(topics)
    }

    /// Stops the worker; any armed timer is cancelled with it.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }

    async fn send(&self, cmd: Command) -> Result<()> {
        self.commands
            .send(cmd)
            .await
            .map_err(|_| RuntimeError::WorkerGone)
    }
}
