//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application stays agnostic about concrete key bindings, and the
//! double-activation tracker that turns two quick activations of the same
//! tile into the "interact" gesture.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use game_core::{Activation, Position};

use crate::state::PanelKind;

/// High-level outcome of a key press while playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    MoveCursor(i32, i32),
    /// Activate the cursor tile; the tracker decides single vs. double.
    Activate,
    /// Explicit interact: always a double activation.
    Interact,
    OpenPanel(PanelKind),
    Help,
    /// Close the topmost thing (dialogue, panel, or back to the menu).
    Back,
    None,
}

/// Navigation within the start screen and panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Confirm,
    /// Delete the selected save slot (load panel only).
    Delete,
    Back,
    Quit,
    None,
}

/// Translates `KeyEvent`s into client commands.
pub struct InputHandler;

impl InputHandler {
    /// Key map for the playing view.
    pub fn game_key(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Left => KeyAction::MoveCursor(-1, 0),
            KeyCode::Right => KeyAction::MoveCursor(1, 0),
            KeyCode::Up => KeyAction::MoveCursor(0, -1),
            KeyCode::Down => KeyAction::MoveCursor(0, 1),
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Esc => KeyAction::Back,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'e' => KeyAction::Interact,
                's' => KeyAction::OpenPanel(PanelKind::Settings),
                'i' => KeyAction::OpenPanel(PanelKind::Items),
                'v' => KeyAction::OpenPanel(PanelKind::SaveMenu),
                'b' => KeyAction::OpenPanel(PanelKind::LoadMenu),
                '?' => KeyAction::Help,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    /// Key map for the start screen and panels.
    pub fn menu_key(key: KeyEvent) -> MenuAction {
        match key.code {
            KeyCode::Up => MenuAction::Up,
            KeyCode::Down => MenuAction::Down,
            KeyCode::Enter => MenuAction::Confirm,
            KeyCode::Esc => MenuAction::Back,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => MenuAction::Quit,
                'd' => MenuAction::Delete,
                _ => MenuAction::None,
            },
            _ => MenuAction::None,
        }
    }
}

/// Recognizes the double-activation gesture: the same tile activated twice
/// within the window. The first press is always a single activation (it may
/// start navigation); the second within the window upgrades to double,
/// mirroring how a pointer double-click arrives after its click.
pub struct ActivationTracker {
    last: Option<(Position, Instant)>,
}

impl ActivationTracker {
    pub const WINDOW: Duration = Duration::from_millis(350);

    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn classify(&mut self, target: Position, now: Instant) -> Activation {
        let double = matches!(
            self.last,
            Some((position, at)) if position == target && now.duration_since(at) <= Self::WINDOW
        );
        // A third press starts a fresh gesture rather than chaining doubles.
        self.last = if double { None } else { Some((target, now)) };
        if double {
            Activation::Double
        } else {
            Activation::Single
        }
    }
}

impl Default for ActivationTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_cursor_and_activation_keys() {
        assert_eq!(
            InputHandler::game_key(key(KeyCode::Left)),
            KeyAction::MoveCursor(-1, 0)
        );
        assert_eq!(InputHandler::game_key(key(KeyCode::Enter)), KeyAction::Activate);
        assert_eq!(
            InputHandler::game_key(key(KeyCode::Char('E'))),
            KeyAction::Interact
        );
        assert_eq!(
            InputHandler::game_key(key(KeyCode::Char('v'))),
            KeyAction::OpenPanel(PanelKind::SaveMenu)
        );
        assert_eq!(InputHandler::game_key(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn two_quick_activations_of_one_tile_become_a_double() {
        let mut tracker = ActivationTracker::new();
        let tile = Position::new(3, 3);
        let t0 = Instant::now();

        assert_eq!(tracker.classify(tile, t0), Activation::Single);
        assert_eq!(
            tracker.classify(tile, t0 + Duration::from_millis(200)),
            Activation::Double
        );
        // The gesture is consumed: a third press starts over.
        assert_eq!(
            tracker.classify(tile, t0 + Duration::from_millis(300)),
            Activation::Single
        );
    }

    #[test]
    fn slow_or_moved_activations_stay_single() {
        let mut tracker = ActivationTracker::new();
        let t0 = Instant::now();

        assert_eq!(tracker.classify(Position::new(1, 1), t0), Activation::Single);
        // Different tile within the window.
        assert_eq!(
            tracker.classify(Position::new(2, 1), t0 + Duration::from_millis(100)),
            Activation::Single
        );
        // Same tile but after the window.
        assert_eq!(
            tracker.classify(Position::new(2, 1), t0 + Duration::from_millis(600)),
            Activation::Single
        );
    }
}
