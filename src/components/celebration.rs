//! Goal celebration overlay: scattered confetti plus a centered banner

use crate::components::layout::centered_popup;
use crate::model::Metric;
use crate::theme::{accent, Palette};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CONFETTI_GLYPHS: [&str; 4] = ["✦", "•", "▪", "*"];
const CONFETTI_COLORS: [Color; 5] = [
    accent::YELLOW,
    accent::PURPLE,
    accent::CYAN,
    accent::GREEN,
    accent::RED,
];

/// Draw the celebration over the whole dashboard
pub fn draw_celebration(
    frame: &mut Frame,
    area: Rect,
    ticks: u64,
    steps: &Metric,
    palette: &Palette,
) {
    let buffer = frame.buffer_mut();
    for (x, y, glyph, color) in confetti_cells(area, ticks) {
        buffer.set_string(x, y, glyph, Style::default().fg(color));
    }

    let popup = centered_popup(area, 44, 7);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "You reached your daily step goal!",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} steps", steps.progress_label()),
            Style::default().fg(palette.subtle),
        )),
    ];

    let banner = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent::YELLOW))
            .title(" 🎉 Goal Reached! 🎉 ")
            .title_style(
                Style::default()
                    .fg(accent::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(palette.surface)),
    );
    frame.render_widget(banner, popup);
}

/// Deterministic confetti positions for an animation phase.
///
/// The phase advances every other tick, so the scatter shimmers without a
/// random number source and tests can pin exact positions.
fn confetti_cells(area: Rect, ticks: u64) -> Vec<(u16, u16, &'static str, Color)> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let phase = ticks / 2;
    let count = ((area.width as usize * area.height as usize) / 40).clamp(12, 64);

    (0..count as u64)
        .map(|i| {
            let bits = scatter(i.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ phase);
            let x = area.x + (bits % area.width as u64) as u16;
            let y = area.y + ((bits >> 16) % area.height as u64) as u16;
            let glyph = CONFETTI_GLYPHS[((bits >> 32) % CONFETTI_GLYPHS.len() as u64) as usize];
            let color = CONFETTI_COLORS[((bits >> 40) % CONFETTI_COLORS.len() as u64) as usize];
            (x, y, glyph, color)
        })
        .collect()
}

/// 64-bit bit mixer, enough randomness for a cosmetic scatter
fn scatter(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_stays_inside_the_area() {
        let area = Rect::new(3, 2, 40, 10);

        for (x, y, _, _) in confetti_cells(area, 17) {
            assert!(x >= area.x && x < area.x + area.width);
            assert!(y >= area.y && y < area.y + area.height);
        }
    }

    #[test]
    fn test_confetti_is_stable_within_a_phase() {
        let area = Rect::new(0, 0, 80, 24);

        assert_eq!(confetti_cells(area, 4), confetti_cells(area, 5));
        assert_ne!(confetti_cells(area, 4), confetti_cells(area, 6));
    }

    #[test]
    fn test_confetti_skips_degenerate_areas() {
        assert!(confetti_cells(Rect::new(0, 0, 0, 10), 0).is_empty());
        assert!(confetti_cells(Rect::new(0, 0, 10, 0), 0).is_empty());
    }

    #[test]
    fn test_confetti_count_tracks_area() {
        let small = confetti_cells(Rect::new(0, 0, 20, 10), 0);
        let large = confetti_cells(Rect::new(0, 0, 200, 50), 0);

        assert_eq!(small.len(), 12);
        assert_eq!(large.len(), 64);
    }
}
