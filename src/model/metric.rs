//! Goal-tracked metrics and percent-complete rules

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::accent;
use ratatui::style::Color;

/// Errors produced when evaluating a metric against its goal
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MetricError {
    /// A goal of zero or below has no meaningful progress
    #[error("goal must be positive, got {0}")]
    InvalidGoal(f64),
}

/// The four tracked goal metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    Steps,
    Calories,
    Water,
    Sleep,
}

impl MetricKind {
    pub fn all() -> [MetricKind; 4] {
        [
            MetricKind::Steps,
            MetricKind::Calories,
            MetricKind::Water,
            MetricKind::Sleep,
        ]
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Steps => "Steps",
            MetricKind::Calories => "Calories",
            MetricKind::Water => "Water",
            MetricKind::Sleep => "Sleep",
        }
    }

    /// Glyph shown next to the label
    pub fn glyph(&self) -> &'static str {
        match self {
            MetricKind::Steps => "👣",
            MetricKind::Calories => "🔥",
            MetricKind::Water => "💧",
            MetricKind::Sleep => "🌙",
        }
    }

    /// Accent color for gauges and headings
    pub fn color(&self) -> Color {
        match self {
            MetricKind::Steps => accent::GREEN,
            MetricKind::Calories => accent::RED,
            MetricKind::Water => accent::BLUE,
            MetricKind::Sleep => accent::PURPLE,
        }
    }
}

/// A single measurement paired with its daily goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub kind: MetricKind,
    pub current: f64,
    pub goal: f64,
}

impl Metric {
    pub fn new(kind: MetricKind, current: f64, goal: f64) -> Self {
        Self { kind, current, goal }
    }

    /// Percent complete in `0.0..=100.0`.
    ///
    /// Progress past the goal is capped at 100 and a negative reading counts
    /// as zero. A goal of zero or below is rejected rather than divided by.
    pub fn percent(&self) -> Result<f64, MetricError> {
        if self.goal <= 0.0 {
            return Err(MetricError::InvalidGoal(self.goal));
        }
        let current = self.current.max(0.0);
        Ok(((current / self.goal) * 100.0).min(100.0))
    }

    /// Percent complete as a whole-number label, e.g. "84%"
    pub fn percent_label(&self) -> String {
        let percent = self.percent().unwrap_or(0.0);
        format!("{}%", percent.round() as u16)
    }

    /// Fraction complete in `0.0..=1.0`, safe to feed straight into a gauge
    pub fn ratio(&self) -> f64 {
        self.percent().unwrap_or(0.0) / 100.0
    }

    /// "current / goal" line shown under the gauge, e.g. "8432 / 10000"
    pub fn progress_label(&self) -> String {
        format!(
            "{} / {}",
            format_quantity(self.current),
            format_quantity(self.goal)
        )
    }

    /// Whether the goal has been met or passed
    pub fn goal_reached(&self) -> bool {
        self.current >= self.goal
    }
}

/// Format a reading without a trailing ".0" for whole numbers
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_basic() {
        let metric = Metric::new(MetricKind::Steps, 8432.0, 10000.0);
        let percent = metric.percent().unwrap();
        assert!((percent - 84.32).abs() < 1e-9);
    }

    #[test]
    fn test_percent_caps_at_100() {
        let metric = Metric::new(MetricKind::Steps, 12000.0, 10000.0);
        assert_eq!(metric.percent().unwrap(), 100.0);
        assert_eq!(metric.percent_label(), "100%");
    }

    #[test]
    fn test_percent_label_rounds_to_whole_number() {
        let metric = Metric::new(MetricKind::Steps, 8432.0, 10000.0);
        assert_eq!(metric.percent_label(), "84%");

        let metric = Metric::new(MetricKind::Calories, 845.0, 1000.0);
        assert_eq!(metric.percent_label(), "85%");
    }

    #[test]
    fn test_zero_goal_is_invalid() {
        let metric = Metric::new(MetricKind::Water, 6.0, 0.0);
        assert_eq!(metric.percent(), Err(MetricError::InvalidGoal(0.0)));
    }

    #[test]
    fn test_negative_goal_is_invalid() {
        let metric = Metric::new(MetricKind::Water, 6.0, -8.0);
        assert_eq!(metric.percent(), Err(MetricError::InvalidGoal(-8.0)));
    }

    #[test]
    fn test_negative_current_counts_as_zero() {
        let metric = Metric::new(MetricKind::Sleep, -2.0, 8.0);
        assert_eq!(metric.percent().unwrap(), 0.0);
        assert_eq!(metric.percent_label(), "0%");
    }

    #[test]
    fn test_ratio_stays_within_unit_interval() {
        let over = Metric::new(MetricKind::Steps, 20000.0, 10000.0);
        assert_eq!(over.ratio(), 1.0);

        let negative = Metric::new(MetricKind::Steps, -50.0, 10000.0);
        assert_eq!(negative.ratio(), 0.0);

        let invalid = Metric::new(MetricKind::Steps, 50.0, 0.0);
        assert_eq!(invalid.ratio(), 0.0);
    }

    #[test]
    fn test_progress_label_drops_trailing_zero() {
        let steps = Metric::new(MetricKind::Steps, 8432.0, 10000.0);
        assert_eq!(steps.progress_label(), "8432 / 10000");

        let sleep = Metric::new(MetricKind::Sleep, 7.5, 8.0);
        assert_eq!(sleep.progress_label(), "7.5 / 8");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(70.5), "70.5");
        assert_eq!(format_quantity(70.0), "70");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn test_goal_reached_at_exact_goal() {
        let metric = Metric::new(MetricKind::Steps, 10000.0, 10000.0);
        assert!(metric.goal_reached());

        let metric = Metric::new(MetricKind::Steps, 9999.0, 10000.0);
        assert!(!metric.goal_reached());
    }
}
