//! Line chart of daily step counts

use crate::model::activity::{self, ActivitySample};
use crate::theme::{accent, Palette};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw the steps trend chart over the activity history
pub fn draw_trend_chart(
    frame: &mut Frame,
    area: Rect,
    samples: &[ActivitySample],
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" 📈 Steps Trend ")
        .title_style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(palette.surface));

    if samples.is_empty() {
        let placeholder = Paragraph::new("No activity recorded yet")
            .style(Style::default().fg(palette.subtle))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let points = activity::chart_points(samples);
    let x_bounds = activity::index_bounds(samples);
    let y_bounds = activity::steps_bounds(samples);

    let x_labels: Vec<Span> = samples
        .iter()
        .map(|sample| Span::styled(sample.axis_label(), Style::default().fg(palette.subtle)))
        .collect();

    let y_labels: Vec<Span> = [y_bounds[0], (y_bounds[0] + y_bounds[1]) / 2.0, y_bounds[1]]
        .iter()
        .map(|value| {
            Span::styled(
                format!("{}", *value as u32),
                Style::default().fg(palette.subtle),
            )
        })
        .collect();

    let dataset = Dataset::default()
        .name("steps")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(accent::EMERALD))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(palette.border))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(palette.border))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
