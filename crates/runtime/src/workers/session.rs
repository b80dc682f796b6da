//! Session worker that owns the authoritative [`game_core::Session`].
//!
//! Receives commands from [`crate::RuntimeHandle`], drives the movement
//! state machine and the dialogue reveal on their timers, and publishes
//! every state change to the event bus.
//!
//! # Design Note
//!
//! The worker is the imperative shell around the pure `game-core` machines:
//! it decides *when* a step happens (wall-clock pacing, supersession,
//! cancellation) while `MovementPlayer` decides *what* a step does. Both
//! timers are plain deadlines held as loop state. Dropping the worker, or
//! simply not re-arming, is all the cancellation there is, so no stale tick
//! can ever fire against a retired grid.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Duration, Instant, sleep_until};

use game_core::{
    Activation, DIALOGUE_CHAR_INTERVAL, DialogueState, Effect, MovementPlayer, Position,
    RegistryError, Session, Settings, StepOutcome, dispatch, find_path,
};

use crate::error::{Result, RuntimeError};
use crate::events::{DialogueEvent, Event, EventBus, SessionEvent};
use crate::handle::SessionSnapshot;
use crate::repository::{RepositoryError, SaveData, SaveRepository, Slot};

/// Commands the handle can send to the session worker.
pub(crate) enum Command {
    /// A tile activation, in user-delivery order.
    Activate {
        position: Position,
        activation: Activation,
    },
    CloseDialogue,
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    Save {
        slot: Slot,
        reply: oneshot::Sender<Result<SaveData>>,
    },
    Load {
        slot: Slot,
        reply: oneshot::Sender<Result<SessionSnapshot>>,
    },
    DeleteSave {
        slot: Slot,
        reply: oneshot::Sender<Result<()>>,
    },
    ListSaves {
        reply: oneshot::Sender<Result<Vec<Option<SaveData>>>>,
    },
    Shutdown,
}

/// Background task that owns the session and its two timers.
pub(crate) struct SessionWorker {
    session: Session,
    player: MovementPlayer,
    commands: mpsc::Receiver<Command>,
    settings: watch::Receiver<Settings>,
    bus: EventBus,
    saves: Arc<dyn SaveRepository>,
    /// When the next movement step fires; `None` while idle.
    next_step_at: Option<Instant>,
    /// When the next dialogue character reveals; `None` when not animating.
    next_char_at: Option<Instant>,
}

impl SessionWorker {
    pub(crate) fn new(
        session: Session,
        commands: mpsc::Receiver<Command>,
        settings: watch::Receiver<Settings>,
        bus: EventBus,
        saves: Arc<dyn SaveRepository>,
    ) -> Self {
        tracing::info!(map = %session.registry.active_id(), "session worker starting");
        Self {
            session,
            player: MovementPlayer::new(),
            commands,
            settings,
            bus,
            saves,
            next_step_at: None,
            next_char_at: None,
        }
    }

    /// Main worker loop. Commands are processed in delivery order; the timer
    /// arms only poll while their deadline is set.
    pub(crate) async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.commands.recv() => match cmd {
                    Some(Command::Shutdown) | None => break,
                    Some(cmd) => self.handle_command(cmd),
                },
                _ = sleep_until(self.next_step_at.unwrap_or_else(Instant::now)),
                    if self.next_step_at.is_some() =>
                {
                    if !self.movement_tick() {
                        break;
                    }
                }
                _ = sleep_until(self.next_char_at.unwrap_or_else(Instant::now)),
                    if self.next_char_at.is_some() =>
                {
                    self.dialogue_tick();
                }
            }
        }
        tracing::debug!("session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Activate {
                position,
                activation,
            } => self.activate(position, activation),
            Command::CloseDialogue => {
                if self.session.dialogue.take().is_some() {
                    self.next_char_at = None;
                    self.bus.publish(Event::Dialogue(DialogueEvent::Closed));
                }
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }
            Command::Save { slot, reply } => {
                let _ = reply.send(self.save(slot));
            }
            Command::Load { slot, reply } => {
                let _ = reply.send(self.load(slot));
            }
            Command::DeleteSave { slot, reply } => {
                let _ = reply.send(self.saves.delete(slot).map_err(RuntimeError::from));
            }
            Command::ListSaves { reply } => {
                let _ = reply.send(self.saves.list().map_err(RuntimeError::from));
            }
            Command::Shutdown => unreachable!("handled in the select loop"),
        }
    }

    /// Dispatches a tile activation. Unknown coordinates and `NoOp` effects
    /// are ignored outright; an empty route (unreachable goal, or already
    /// there) produces no state change and no events.
    fn activate(&mut self, position: Position, activation: Activation) {
        let Some(tile) = self.session.registry.active().tile_at(position) else {
            tracing::debug!(%position, "activation outside the grid ignored");
            return;
        };
        let effect = dispatch(tile, activation);

        match effect {
            Effect::StartNavigation(goal) => {
                let route = find_path(
                    self.session.registry.active(),
                    self.session.player.position,
                    goal,
                );
                if route.is_empty() {
                    tracing::debug!(%goal, "no route to goal; activation ignored");
                    return;
                }
                let steps = route.len();
                // Supersession: this replaces any in-flight route outright
                // and re-schedules the next step from now.
                self.player.begin(route);
                self.next_step_at = Some(Instant::now() + self.movement_delay());
                self.bus
                    .publish(Event::Session(SessionEvent::RouteStarted { goal, steps }));
            }
            Effect::StartDialogue(id) => {
                let settings = *self.settings.borrow();
                let Some(line) = game_content::dialogue::line(&id, settings.language) else {
                    tracing::warn!(%id, "tile references an unauthored dialogue line");
                    return;
                };
                let opened = self.session.open_dialogue(DialogueState::open(
                    id.clone(),
                    line,
                    settings.animate_dialogue,
                ));
                if !opened {
                    // Re-triggering the line already on screen is a no-op.
                    return;
                }
                self.next_char_at = (settings.animate_dialogue && !line.is_empty())
                    .then(|| Instant::now() + DIALOGUE_CHAR_INTERVAL);
                self.bus.publish(Event::Dialogue(DialogueEvent::Opened {
                    id,
                    text: line.to_string(),
                }));
            }
            Effect::NoOp => {}
        }
    }

    /// One movement tick: apply the head of the route, publish, and re-arm
    /// with the delay read fresh from the settings watch.
    ///
    /// Returns false only on a fatal registry failure (a door to an
    /// unregistered map; bootstrap validation makes this unreachable with
    /// well-authored content).
    fn movement_tick(&mut self) -> bool {
        self.next_step_at = None;
        match self.player.step(&mut self.session) {
            Ok(StepOutcome::Stepped { position }) => {
                self.next_step_at = Some(Instant::now() + self.movement_delay());
                self.bus
                    .publish(Event::Session(SessionEvent::PlayerMoved { position }));
                true
            }
            Ok(StepOutcome::Arrived { position }) => {
                self.bus
                    .publish(Event::Session(SessionEvent::PlayerMoved { position }));
                true
            }
            Ok(StepOutcome::Transitioned { map, position }) => {
                tracing::info!(%map, "door transition");
                self.bus
                    .publish(Event::Session(SessionEvent::MapChanged { map, position }));
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "movement step failed; stopping session");
                false
            }
        }
    }

    /// One dialogue tick: reveal a character and re-arm until complete.
    fn dialogue_tick(&mut self) {
        self.next_char_at = None;
        let Some(dialogue) = self.session.dialogue.as_mut() else {
            return;
        };
        if dialogue.advance() {
            let visible = dialogue.visible().to_string();
            if !dialogue.is_complete() {
                self.next_char_at = Some(Instant::now() + DIALOGUE_CHAR_INTERVAL);
            }
            self.bus
                .publish(Event::Dialogue(DialogueEvent::Progressed { visible }));
        }
    }

    /// The configured step delay, read fresh at every scheduling decision.
    fn movement_delay(&self) -> Duration {
        self.settings.borrow().movement.delay()
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            map: self.session.registry.active_id().clone(),
            position: self.session.player.position,
            items: self.session.items.clone(),
            dialogue: self
                .session
                .dialogue
                .as_ref()
                .map(|d| d.visible().to_string()),
        }
    }

    fn save(&self, slot: Slot) -> Result<SaveData> {
        let record = SaveData {
            map_id: self.session.registry.active_id().clone(),
            player: self.session.player.position,
            items: self.session.items.clone(),
            updated_at: chrono::Utc::now(),
        };
        self.saves.save(slot, &record)?;
        tracing::info!(slot = slot.index(), map = %record.map_id, "session saved");
        Ok(record)
    }

    /// Restores a slot. The record is the sole source of truth: the route
    /// and dialogue are discarded, the active grid and position set directly.
    fn load(&mut self, slot: Slot) -> Result<SessionSnapshot> {
        let record = self
            .saves
            .load(slot)?
            .ok_or(RuntimeError::EmptySlot(slot.index()))?;

        let grid = self
            .session
            .registry
            .get(&record.map_id)
            .ok_or_else(|| RegistryError::UnknownMap(record.map_id.clone()))?;
        if !grid.is_walkable(record.player) {
            return Err(RepositoryError::CorruptedData(format!(
                "slot {} places the player on non-walkable {} of {}",
                slot.index(),
                record.player,
                record.map_id
            ))
            .into());
        }

        self.player.cancel();
        self.next_step_at = None;
        self.next_char_at = None;
        self.session.restore(&record.map_id, record.player)?;
        self.session.items = record.items;

        tracing::info!(slot = slot.index(), map = %record.map_id, "session loaded");
        self.bus.publish(Event::Session(SessionEvent::SessionLoaded {
            map: record.map_id,
            position: record.player,
        }));
        self.bus.publish(Event::Dialogue(DialogueEvent::Closed));
        Ok(self.snapshot())
    }
}
