//! Nutrition breakdown panel
//!
//! Placeholder literals, same as the info tiles.

use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const NUTRIENTS: [(&str, &str); 3] = [("Protein", "65g"), ("Carbs", "220g"), ("Fat", "55g")];

/// Draw the three-column nutrition summary
pub fn draw_nutrition(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" 🍎 Today's Nutrition ")
        .title_style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(palette.surface));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    for ((label, value), column) in NUTRIENTS.into_iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(label, Style::default().fg(palette.subtle))),
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let column_text = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(column_text, *column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrient_literals() {
        assert_eq!(
            NUTRIENTS,
            [("Protein", "65g"), ("Carbs", "220g"), ("Fat", "55g")]
        );
    }
}
