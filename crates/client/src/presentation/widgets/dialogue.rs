//! Dialogue popup showing the (possibly still revealing) line.

use game_content::{TextKey, text};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(visible) = state.dialogue.as_deref() else {
        return;
    };
    let lang = state.settings.language;

    // Anchored to the bottom, original dialogue-bar style.
    let height = 5.min(area.height);
    let popup = Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    };

    let body = format!("{} \"{}\"", text(TextKey::NpcSays, lang), visible);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" [Esc] {} ", text(TextKey::Close, lang)));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::White))
            .block(block),
        popup,
    );
}
