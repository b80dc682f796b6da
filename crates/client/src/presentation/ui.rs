//! Main render entry point, routed by app mode.
//!
//! Full-screen modes (start screen) replace the game view entirely; panels
//! and dialogue render as overlays on top of it.

use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, widgets};
use crate::state::{AppMode, AppState};

pub fn render(terminal: &mut Tui, state: &AppState) -> Result<()> {
    terminal.draw(|frame| {
        if matches!(state.mode, AppMode::StartScreen | AppMode::Help) {
            widgets::start_screen::render(frame, frame.area(), state);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Min(1),    // map
                Constraint::Length(1), // key hints
            ])
            .split(frame.area());

        widgets::map::render_header(frame, chunks[0], state);
        widgets::map::render(frame, chunks[1], state);
        widgets::map::render_footer(frame, chunks[2], state);

        if state.dialogue.is_some() {
            widgets::dialogue::render(frame, frame.area(), state);
        }

        if let AppMode::Panel(panel) = state.mode {
            widgets::panels::render(frame, frame.area(), state, panel);
        }
    })?;

    Ok(())
}
