//! Deterministic exploration-game logic shared across the runtime and client.
//!
//! `game-core` defines the canonical rules of the tile world: the grid model,
//! the breadth-first path finder, the step-playback movement state machine,
//! and the activation dispatcher. Everything here is pure and synchronous;
//! pacing, timers, persistence, and rendering live in the supporting crates,
//! which depend on the types re-exported below.
pub mod config;
pub mod dialogue;
pub mod interact;
pub mod map;
pub mod movement;
pub mod path;
pub mod registry;
pub mod state;

pub use config::{DIALOGUE_CHAR_INTERVAL, Language, Settings, SpeedPreset};
pub use dialogue::DialogueState;
pub use interact::{Activation, Effect, dispatch};
pub use map::{MapDimensions, MapError, MapGrid, Tile, TileKind};
pub use movement::{MovementPlayer, PlaybackState, StepError, StepOutcome};
pub use path::{Route, find_path};
pub use registry::{MapRegistry, RegistryError};
pub use state::{DialogueId, MapId, PlayerState, Position, Session};
