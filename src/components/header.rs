//! Header bar: title on the left, sync indicator and theme toggle on the
//! right. The toggle's drawn bounds are returned so clicks can be resolved.

use crate::theme::{accent, Palette, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Spinner frames for the cosmetic sync pulse
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Fixed column for the sync indicator so the header never shifts
const SYNC_WIDTH: u16 = 12;

/// What the header needs from the dashboard state
pub struct HeaderContext<'a> {
    pub theme: Theme,
    pub syncing: bool,
    pub ticks: u64,
    pub mood: Option<&'a str>,
    pub palette: &'a Palette,
}

/// Pick the spinner frame for a tick count
fn spinner_frame(ticks: u64) -> &'static str {
    SPINNER_FRAMES[(ticks % SPINNER_FRAMES.len() as u64) as usize]
}

/// Draw the header, returning the clickable bounds of the theme toggle
pub fn draw_header(frame: &mut Frame, area: Rect, ctx: &HeaderContext) -> Rect {
    let palette = ctx.palette;

    let button_text = format!("{} {}", ctx.theme.toggle_icon(), ctx.theme.toggle_label());
    // borders plus one cell of padding each side
    let button_width = button_text.width() as u16 + 4;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(SYNC_WIDTH),
            Constraint::Length(button_width),
        ])
        .split(area);

    let mut title_lines = vec![Line::from(Span::styled(
        "Fitness Dashboard",
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(mood) = ctx.mood {
        title_lines.push(Line::from(Span::styled(
            format!("Feeling {} today", mood),
            Style::default().fg(palette.subtle),
        )));
    }
    frame.render_widget(Paragraph::new(title_lines), columns[0]);

    if ctx.syncing {
        let sync_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(columns[1]);
        let indicator = Paragraph::new(Line::from(vec![
            Span::styled(spinner_frame(ctx.ticks), Style::default().fg(accent::CYAN)),
            Span::raw(" "),
            Span::styled("Syncing", Style::default().fg(accent::CYAN)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(indicator, sync_rows[0]);
    }

    let button = Paragraph::new(Span::styled(
        button_text,
        Style::default().fg(palette.text),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.track)),
    );
    frame.render_widget(button, columns[2]);

    columns[2]
}
