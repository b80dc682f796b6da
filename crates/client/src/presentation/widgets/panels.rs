//! Overlay panels: settings, items, and the save/load slot menus.

use game_content::{TextKey, text};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::{AppState, PanelKind};

use super::centered;

/// Selectable rows in the settings panel.
pub const SETTINGS_ITEMS: usize = 6;

/// Selectable rows in the save/load panels (one per slot).
pub const SLOT_ITEMS: usize = runtime::Slot::COUNT as usize;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, panel: PanelKind) {
    let lang = state.settings.language;

    let (title, lines) = match panel {
        PanelKind::Settings => (text(TextKey::Settings, lang), settings_lines(state)),
        PanelKind::Items => (text(TextKey::Items, lang), items_lines(state)),
        PanelKind::SaveMenu => (text(TextKey::SaveGame, lang), slot_lines(state, false)),
        PanelKind::LoadMenu => (text(TextKey::LoadGame, lang), slot_lines(state, true)),
    };

    let height = (lines.len() as u16 + 4).max(8);
    let popup = centered(area, 56, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} | [Esc] {} ", title, text(TextKey::Close, lang))),
        ),
        popup,
    );
}

fn selectable(label: String, selected: bool) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::styled(format!("{marker}{label}"), style)
}

fn settings_lines(state: &AppState) -> Vec<Line<'static>> {
    let lang = state.settings.language;
    let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };

    let labels = [
        text(TextKey::BackToMenu, lang).to_string(),
        format!(
            "{}: {}",
            text(TextKey::MovementSpeed, lang),
            state.settings.movement
        ),
        format!(
            "{}: {}",
            text(TextKey::LanguageName, lang),
            state.settings.language
        ),
        format!(
            "{} {}",
            checkbox(state.settings.show_labels),
            text(TextKey::ShowTileLabels, lang)
        ),
        format!(
            "{} {}",
            checkbox(state.settings.animate_dialogue),
            text(TextKey::DialogueAnimation, lang)
        ),
        text(TextKey::ResetSettings, lang).to_string(),
    ];

    labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| selectable(label, index == state.panel_index))
        .collect()
}

fn items_lines(state: &AppState) -> Vec<Line<'static>> {
    let lang = state.settings.language;
    if state.items.is_empty() {
        return vec![Line::styled(
            text(TextKey::NoItems, lang),
            Style::default().fg(Color::DarkGray),
        )];
    }
    state
        .items
        .iter()
        .map(|item| Line::from(format!("• {item}")))
        .collect()
}

fn slot_lines(state: &AppState, deletable: bool) -> Vec<Line<'static>> {
    let lang = state.settings.language;

    let mut lines: Vec<Line> = (0..SLOT_ITEMS)
        .map(|index| {
            let summary = match state.saves.get(index).and_then(|slot| slot.as_ref()) {
                Some(record) => record.updated_at.format("%Y-%m-%d %H:%M").to_string(),
                None => text(TextKey::Empty, lang).to_string(),
            };
            let label = format!("{} {}: {}", text(TextKey::Slot, lang), index + 1, summary);
            selectable(label, index == state.panel_index)
        })
        .collect();

    if deletable {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!(
                "[Enter] {}  [d] {}",
                text(TextKey::Load, lang),
                text(TextKey::DeleteSlot, lang)
            ),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("[Enter] {}", text(TextKey::SaveToSlot, lang)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    lines
}
