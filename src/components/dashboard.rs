//! Dashboard component - the single view of the application
//!
//! Owns the three pieces of UI state (theme, syncing, celebrating) and every
//! timer behind them. All transitions run through `update`, driven by ticks
//! and input; the immutable dataset is injected at construction and only
//! read from there on.

use crate::action::Action;
use crate::component::Component;
use crate::components::celebration::draw_celebration;
use crate::components::header::{draw_header, HeaderContext};
use crate::components::info_tiles::{build_info_tiles, draw_info_tiles};
use crate::components::layout::calculate_dashboard_layout;
use crate::components::nutrition::draw_nutrition;
use crate::components::progress_card::draw_progress_card;
use crate::components::trend_chart::draw_trend_chart;
use crate::model::{DashboardData, TimerId, TimerQueue};
use crate::theme::{accent, Palette, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Gap between two cosmetic sync pulses
pub const SYNC_INTERVAL: Duration = Duration::from_secs(10);
/// How long each sync pulse shows
pub const SYNC_PULSE: Duration = Duration::from_secs(1);
/// How long the celebration overlay stays up
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(5);

/// Dashboard component
pub struct DashboardComponent {
    data: DashboardData,
    theme: Theme,
    syncing: bool,
    celebrating: bool,
    /// Tick counter driving the spinner and confetti animation
    ticks: u64,
    timers: TimerQueue,
    /// Where the theme toggle landed in the last draw, for click hit tests
    theme_button: Option<Rect>,
}

impl DashboardComponent {
    pub fn new(data: DashboardData, theme: Theme) -> Self {
        Self {
            data,
            theme,
            syncing: false,
            celebrating: false,
            ticks: 0,
            timers: TimerQueue::new(),
            theme_button: None,
        }
    }

    /// Arm the session timers and run the one-time goal check.
    ///
    /// `now` is passed in rather than read here so tests can drive the
    /// whole lifecycle with synthetic instants.
    pub fn mount_at(&mut self, now: Instant) {
        self.timers
            .schedule_repeating(TimerId::SyncCycle, now + SYNC_INTERVAL, SYNC_INTERVAL);
        self.check_step_goal(now);
        debug!("dashboard mounted");
    }

    /// Cancel every pending timer.
    ///
    /// Flags keep their last value; with the queue empty nothing can flip
    /// them afterwards.
    pub fn unmount(&mut self) {
        self.timers.cancel_all();
        debug!("dashboard unmounted, all timers cancelled");
    }

    /// Advance animations and fire any due timers
    pub fn on_tick(&mut self, now: Instant) {
        self.ticks = self.ticks.wrapping_add(1);

        for timer in self.timers.poll(now) {
            match timer {
                TimerId::SyncCycle => {
                    self.syncing = true;
                    self.timers
                        .schedule_once(TimerId::SyncPulseEnd, now + SYNC_PULSE);
                    debug!("sync pulse started");
                }
                TimerId::SyncPulseEnd => {
                    self.syncing = false;
                    debug!("sync pulse finished");
                }
                TimerId::CelebrationEnd => {
                    self.celebrating = false;
                    debug!("celebration dismissed");
                }
            }
        }
    }

    /// Evaluated once at mount; the dataset never changes afterwards
    fn check_step_goal(&mut self, now: Instant) {
        let steps = self.data.steps_metric();
        if steps.goal_reached() {
            self.celebrating = true;
            self.timers
                .schedule_once(TimerId::CelebrationEnd, now + CELEBRATION_DURATION);
            info!(steps = steps.current, goal = steps.goal, "step goal reached");
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub(crate) fn active_timers(&self) -> usize {
        self.timers.len()
    }
}

impl Component for DashboardComponent {
    fn init(&mut self) -> Result<()> {
        self.mount_at(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('d') => Some(Action::ToggleTheme),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(button) = self.theme_button {
                if button.contains(Position::new(mouse.column, mouse.row)) {
                    return Ok(Some(Action::ToggleTheme));
                }
            }
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => self.on_tick(Instant::now()),
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                info!(
                    "theme switched to {}",
                    if self.theme.is_dark() { "dark" } else { "light" }
                );
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.theme.palette();

        let background = Block::default().style(Style::default().bg(palette.background));
        frame.render_widget(background, area);

        let layout = calculate_dashboard_layout(area);

        let header = HeaderContext {
            theme: self.theme,
            syncing: self.syncing,
            ticks: self.ticks,
            mood: self.data.mood.as_deref(),
            palette: &palette,
        };
        self.theme_button = Some(draw_header(frame, layout.header, &header));

        for (metric, cell) in self.data.metrics().iter().zip(layout.cards.iter()) {
            draw_progress_card(frame, *cell, metric, &palette);
        }

        draw_trend_chart(frame, layout.chart, &self.data.activities, &palette);

        let tiles = build_info_tiles(self.data.weight);
        draw_info_tiles(frame, &layout.tiles, &tiles, &palette);

        draw_nutrition(frame, layout.nutrition, &palette);
        draw_help_bar(frame, layout.help, &palette);

        if self.celebrating {
            draw_celebration(frame, area, self.ticks, &self.data.steps_metric(), &palette);
        }

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions
// ─────────────────────────────────────────────────────────────────────────────

/// Render the bottom key-hint bar
fn draw_help_bar(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hint_key = Style::default()
        .fg(accent::YELLOW)
        .add_modifier(Modifier::BOLD);
    let hint_text = Style::default().fg(palette.subtle);

    let help = Line::from(vec![
        Span::styled(" q ", hint_key),
        Span::styled("Quit", hint_text),
        Span::raw("  "),
        Span::styled(" d ", hint_key),
        Span::styled("Toggle theme", hint_text),
        Span::raw("  "),
        Span::styled(" click ", hint_key),
        Span::styled("the header button also toggles", hint_text),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}
