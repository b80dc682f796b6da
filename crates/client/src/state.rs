//! Client-side application state: the render model and UI modes.

use std::collections::HashMap;

use game_core::{MapGrid, MapId, Position, Settings};
use runtime::{DialogueEvent, SaveData, SessionEvent, SessionSnapshot};

/// Overlay panels reachable from the playing view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    Settings,
    Items,
    SaveMenu,
    LoadMenu,
}

/// Top-level UI modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    StartScreen,
    Playing,
    Help,
    Panel(PanelKind),
}

/// Everything the renderer needs, kept current from runtime events.
///
/// The client holds its own copy of the authored grids for drawing; the
/// worker owns the authoritative session.
pub struct AppState {
    pub mode: AppMode,
    pub menu_index: usize,
    pub panel_index: usize,
    pub cursor: Position,
    pub map: MapId,
    pub grids: HashMap<MapId, MapGrid>,
    pub player: Position,
    pub items: Vec<String>,
    /// Visible dialogue text, when a dialogue is open.
    pub dialogue: Option<String>,
    /// Slot contents shown by the save/load panels.
    pub saves: Vec<Option<SaveData>>,
    pub settings: Settings,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(grids: Vec<MapGrid>, snapshot: SessionSnapshot, settings: Settings) -> Self {
        let grids: HashMap<MapId, MapGrid> = grids
            .into_iter()
            .map(|grid| (grid.id().clone(), grid))
            .collect();

        Self {
            mode: AppMode::StartScreen,
            menu_index: 0,
            panel_index: 0,
            cursor: snapshot.position,
            map: snapshot.map,
            grids,
            player: snapshot.position,
            items: snapshot.items,
            dialogue: snapshot.dialogue,
            saves: Vec::new(),
            settings,
            dirty: true,
            should_quit: false,
        }
    }

    /// The grid currently on screen.
    pub fn grid(&self) -> &MapGrid {
        self.grids
            .get(&self.map)
            .expect("active map is always in the authored set")
    }

    /// Moves the tile cursor, clamped to the grid.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let dims = self.grid().dimensions();
        let x = (self.cursor.x + dx).clamp(0, dims.width as i32 - 1);
        let y = (self.cursor.y + dy).clamp(0, dims.height as i32 - 1);
        let moved = Position::new(x, y);
        if moved != self.cursor {
            self.cursor = moved;
            self.dirty = true;
        }
    }

    pub fn open_panel(&mut self, panel: PanelKind) {
        self.mode = AppMode::Panel(panel);
        self.panel_index = 0;
        self.dirty = true;
    }

    pub fn apply_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::RouteStarted { .. } => {}
            SessionEvent::PlayerMoved { position } => {
                self.player = position;
                self.dirty = true;
            }
            SessionEvent::MapChanged { map, position }
            | SessionEvent::SessionLoaded { map, position } => {
                self.map = map;
                self.player = position;
                self.cursor = position;
                self.dirty = true;
            }
        }
    }

    pub fn apply_dialogue_event(&mut self, event: DialogueEvent) {
        match event {
            DialogueEvent::Opened { text, .. } => {
                // Animated lines start empty; the full text case arrives as
                // the snapshot of an unanimated open.
                self.dialogue = Some(if self.settings.animate_dialogue {
                    String::new()
                } else {
                    text
                });
            }
            DialogueEvent::Progressed { visible } => self.dialogue = Some(visible),
            DialogueEvent::Closed => self.dialogue = None,
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{MapDimensions, Tile, TileKind};

    fn tiny_state() -> AppState {
        let tiles = (0..3)
            .flat_map(|y| {
                (0..3).map(move |x| Tile::new(Position::new(x, y), TileKind::Ground))
            })
            .collect();
        let grid = MapGrid::new(
            "tiny".into(),
            Position::new(1, 1),
            MapDimensions::new(3, 3),
            tiles,
        )
        .unwrap();
        let snapshot = SessionSnapshot {
            map: "tiny".into(),
            position: Position::new(1, 1),
            items: Vec::new(),
            dialogue: None,
        };
        AppState::new(vec![grid], snapshot, Settings::default())
    }

    #[test]
    fn cursor_clamps_to_the_grid() {
        let mut state = tiny_state();
        state.move_cursor(5, 0);
        assert_eq!(state.cursor, Position::new(2, 1));
        state.move_cursor(0, -5);
        assert_eq!(state.cursor, Position::new(2, 0));
    }

    #[test]
    fn map_change_recenters_cursor_on_the_player() {
        let mut state = tiny_state();
        state.cursor = Position::new(2, 2);
        state.apply_session_event(SessionEvent::SessionLoaded {
            map: "tiny".into(),
            position: Position::new(1, 0),
        });
        assert_eq!(state.player, Position::new(1, 0));
        assert_eq!(state.cursor, Position::new(1, 0));
    }
}
