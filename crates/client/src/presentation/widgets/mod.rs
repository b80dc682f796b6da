//! One module per widget, all consuming [`crate::state::AppState`] directly.

pub mod dialogue;
pub mod map;
pub mod panels;
pub mod start_screen;

use ratatui::layout::Rect;

/// Centers a `width` x `height` box inside `area`, clamped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
