//! Static informational tiles
//!
//! Heart rate, achievements and active time are placeholder literals with no
//! data source behind them; only the weight tile reads the dataset.

use crate::model::format_quantity;
use crate::theme::{accent, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One tile's contents
#[derive(Debug, Clone, PartialEq)]
pub struct InfoTile {
    pub glyph: &'static str,
    pub label: &'static str,
    pub value: String,
    pub accent: Color,
}

/// Build the four tiles in display order
pub fn build_info_tiles(weight_kg: f64) -> [InfoTile; 4] {
    [
        InfoTile {
            glyph: "❤",
            label: "Heart Rate",
            value: "72 BPM".to_string(),
            accent: accent::RED,
        },
        InfoTile {
            glyph: "🏆",
            label: "Achievements",
            value: "12".to_string(),
            accent: accent::YELLOW,
        },
        InfoTile {
            glyph: "⏱",
            label: "Active Time",
            value: "45 mins".to_string(),
            accent: accent::BLUE,
        },
        InfoTile {
            glyph: "⚖",
            label: "Weight",
            value: format!("{} kg", format_quantity(weight_kg)),
            accent: accent::PURPLE,
        },
    ]
}

/// Draw the tiles, one per grid cell
pub fn draw_info_tiles(frame: &mut Frame, cells: &[Rect], tiles: &[InfoTile], palette: &Palette) {
    for (tile, cell) in tiles.iter().zip(cells.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface));

        let inner = block.inner(*cell);
        frame.render_widget(block, *cell);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let heading = Paragraph::new(Line::from(vec![
            Span::styled(tile.glyph, Style::default().fg(tile.accent)),
            Span::raw(" "),
            Span::styled(tile.label, Style::default().fg(palette.subtle)),
        ]));
        frame.render_widget(heading, rows[0]);

        let value = Paragraph::new(Span::styled(
            tile.value.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(value, rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DashboardData;

    #[test]
    fn test_tiles_keep_their_fixed_literals() {
        let tiles = build_info_tiles(70.5);

        assert_eq!(tiles[0].value, "72 BPM");
        assert_eq!(tiles[1].value, "12");
        assert_eq!(tiles[2].value, "45 mins");
        assert_eq!(tiles[3].value, "70.5 kg");
    }

    #[test]
    fn test_tiles_ignore_metric_and_activity_data() {
        let sample = DashboardData::sample();
        let mut other = DashboardData::sample();
        other.steps = 0.0;
        other.calories = 9999.0;
        other.activities.clear();

        // same weight, everything else different: identical tiles
        assert_eq!(build_info_tiles(sample.weight), build_info_tiles(other.weight));
    }

    #[test]
    fn test_weight_tile_follows_the_dataset() {
        assert_eq!(build_info_tiles(68.0)[3].value, "68 kg");
        assert_eq!(build_info_tiles(70.5)[3].value, "70.5 kg");
    }
}
