//! Event payloads per topic.

use game_core::{DialogueId, MapId, Position};

/// Player-state and active-grid changes. Everything a renderer needs to stay
/// current arrives here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A navigation request produced a route and playback began.
    RouteStarted { goal: Position, steps: usize },

    /// One playback tick advanced the player.
    PlayerMoved { position: Position },

    /// Arrival on a door switched the active grid; the player stands at the
    /// new map's entry point.
    MapChanged { map: MapId, position: Position },

    /// A save slot was restored; active grid and position were set directly
    /// from the record.
    SessionLoaded { map: MapId, position: Position },
}

/// Dialogue lifecycle, including the progressive reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogueEvent {
    Opened { id: DialogueId, text: String },

    /// One more character became visible.
    Progressed { visible: String },

    Closed,
}
