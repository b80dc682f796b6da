//! Start screen and the how-to-play modal.

use game_content::{TextKey, text};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::{AppMode, AppState};

use super::centered;

/// Start-screen entries, in render order.
pub const MENU_ITEMS: usize = 3;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let lang = state.settings.language;

    let labels = [
        text(TextKey::Play, lang),
        text(TextKey::HowToPlay, lang),
        text(TextKey::Close, lang),
    ];

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "P R A E V E R S E",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for (index, label) in labels.iter().enumerate() {
        let marker = if index == state.menu_index { "▶ " } else { "  " };
        let style = if index == state.menu_index {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::styled(format!("{marker}{label}"), style));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );

    if state.mode == AppMode::Help {
        render_help(frame, area, state);
    }
}

fn render_help(frame: &mut Frame, area: Rect, state: &AppState) {
    let lang = state.settings.language;
    let lines = vec![
        Line::styled(
            text(TextKey::HowToPlayTitle, lang),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("• {}", text(TextKey::InstructionMove, lang))),
        Line::from(format!("• {}", text(TextKey::InstructionInteract, lang))),
        Line::from(format!("• {}", text(TextKey::InstructionWalls, lang))),
    ];

    let popup = centered(area, 60, 9);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" [Esc] {} ", text(TextKey::Close, lang))),
        ),
        popup,
    );
}
