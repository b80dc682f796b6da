//! Session-scoped state and the identifier newtypes shared across modules.

use std::fmt;

use crate::dialogue::DialogueState;
use crate::registry::{MapRegistry, RegistryError};

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifier of an authored map (e.g. `"map01"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MapId(String);

impl MapId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MapId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an authored dialogue line.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DialogueId(String);

impl DialogueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DialogueId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for DialogueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mutable player record. The movement player is the only writer of
/// `position` while a route is playing back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
}

impl PlayerState {
    pub fn at(position: Position) -> Self {
        Self { position }
    }
}

/// The single owned record of everything that mutates during play: the map
/// registry (for the active-grid pointer), the player, carried items, and the
/// dialogue being shown. Created at session start, dropped at session end;
/// there is no global state anywhere in the core.
#[derive(Debug)]
pub struct Session {
    pub registry: MapRegistry,
    pub player: PlayerState,
    pub items: Vec<String>,
    pub dialogue: Option<DialogueState>,
}

impl Session {
    /// Starts a session on the registry's active map, spawning the player at
    /// that map's entry point.
    pub fn new(registry: MapRegistry) -> Self {
        let player = PlayerState::at(registry.active().entry());
        Self {
            registry,
            player,
            items: Vec::new(),
            dialogue: None,
        }
    }

    /// Applies a restored save: the record is the sole source of truth, so
    /// the active grid and position are set directly and any open dialogue is
    /// discarded. No route is replayed.
    pub fn restore(&mut self, map: &MapId, position: Position) -> Result<(), RegistryError> {
        self.registry.set_active(map)?;
        self.player.position = position;
        self.dialogue = None;
        Ok(())
    }

    /// Opens a dialogue, unless the same line is already showing (re-triggering
    /// an NPC that is mid-conversation must not reset the reveal).
    ///
    /// Returns false for the idempotent re-trigger case.
    pub fn open_dialogue(&mut self, dialogue: DialogueState) -> bool {
        if let Some(current) = &self.dialogue
            && current.id() == dialogue.id()
        {
            return false;
        }
        self.dialogue = Some(dialogue);
        true
    }

    pub fn close_dialogue(&mut self) {
        self.dialogue = None;
    }
}
