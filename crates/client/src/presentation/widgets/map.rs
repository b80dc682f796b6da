//! Map grid widget: tiles, player marker, and the tile cursor.

use game_content::{TextKey, text};
use game_core::TileKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;

const GROUND_COLOR: Color = Color::Rgb(0x99, 0x99, 0x99);
const WALL_COLOR: Color = Color::Rgb(0x33, 0x33, 0x33);
const DOOR_COLOR: Color = Color::Rgb(0x80, 0x00, 0x80);

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header = Line::from(vec![
        Span::styled("Praeverse", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  |  "),
        Span::raw(state.map.as_str()),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let grid = state.grid();
    let labels = state.settings.show_labels;

    let lines: Vec<Line> = grid
        .rows()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|tile| {
                    let position = tile.position();
                    let (glyph, style) = tile_cell(tile.kind(), labels);

                    let (glyph, style) = if position == state.player {
                        ("@ ".to_string(), style.fg(Color::White).add_modifier(Modifier::BOLD))
                    } else {
                        (glyph, style)
                    };

                    let style = if position == state.cursor {
                        style.add_modifier(Modifier::REVERSED)
                    } else {
                        style
                    };

                    Span::styled(glyph, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let lang = state.settings.language;
    let hints = format!(
        "[?] {}  [s] {}  [i] {}  [v] {}  [b] {}  [Esc] {}",
        text(TextKey::HowToPlay, lang),
        text(TextKey::Settings, lang),
        text(TextKey::Items, lang),
        text(TextKey::Save, lang),
        text(TextKey::Load, lang),
        text(TextKey::Close, lang),
    );
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Glyph and style for one tile. With labels on, doors and NPCs show their
/// letter; otherwise everything renders as colored blocks.
fn tile_cell(kind: &TileKind, labels: bool) -> (String, Style) {
    match kind {
        TileKind::Ground => ("· ".to_string(), Style::default().fg(GROUND_COLOR)),
        TileKind::Wall => ("██".to_string(), Style::default().fg(WALL_COLOR)),
        TileKind::Door { .. } => {
            let glyph = if labels { "D " } else { "▒▒" };
            (glyph.to_string(), Style::default().fg(DOOR_COLOR))
        }
        TileKind::Npc { color, .. } => {
            let fg = color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(Color::Blue);
            let glyph = if labels { "N " } else { "● " };
            (glyph.to_string(), Style::default().fg(fg))
        }
    }
}

/// Parses `#rgb` and `#rrggbb` display colors; anything else is `None`.
fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.strip_prefix('#')?;
    let (r, g, b) = match hex.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
            (channel(0).ok()?, channel(1).ok()?, channel(2).ok()?)
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
            (channel(0).ok()?, channel(2).ok()?, channel(4).ok()?)
        }
        _ => return None,
    };
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex_colors() {
        assert_eq!(parse_hex_color("#2aa"), Some(Color::Rgb(0x22, 0xaa, 0xaa)));
        assert_eq!(parse_hex_color("#336699"), Some(Color::Rgb(0x33, 0x66, 0x99)));
        assert_eq!(parse_hex_color("blue"), None);
        assert_eq!(parse_hex_color("#12345"), None);
    }

    #[test]
    fn cells_are_uniformly_wide() {
        for kind in [
            TileKind::Ground,
            TileKind::Wall,
            TileKind::Door {
                destination: "map02".into(),
            },
            TileKind::Npc {
                dialogue: None,
                color: Some("#2aa".into()),
            },
        ] {
            for labels in [false, true] {
                // Every tile renders as exactly two terminal cells.
                let (glyph, _) = tile_cell(&kind, labels);
                assert_eq!(glyph.chars().count(), 2, "{kind:?}");
            }
        }
    }
}
