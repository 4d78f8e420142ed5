//! Goal progress card: a gauge with the percent inside and the raw
//! "current / goal" pair beneath it

use crate::model::Metric;
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draw one metric card into its grid cell
pub fn draw_progress_card(frame: &mut Frame, area: Rect, metric: &Metric, palette: &Palette) {
    let accent = metric.kind.color();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" {} {} ", metric.kind.glyph(), metric.kind.label()))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(palette.surface));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    // ratio() saturates into 0..=1, so the gauge cannot be overdriven
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(palette.track))
        .use_unicode(true)
        .ratio(metric.ratio())
        .label(Span::styled(
            metric.percent_label(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, rows[1]);

    let progress = Paragraph::new(Span::styled(
        metric.progress_label(),
        Style::default().fg(palette.subtle),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(progress, rows[3]);
}
