//! Daily activity samples behind the steps trend chart

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Y-axis bounds are rounded out to the nearest multiple of this
const ROUND_TO: f64 = 500.0;

/// One day's recorded step count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySample {
    pub date: NaiveDate,
    pub steps: u32,
}

impl ActivitySample {
    pub fn new(date: NaiveDate, steps: u32) -> Self {
        Self { date, steps }
    }

    /// Short axis label, e.g. "Mar 1"
    pub fn axis_label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

/// Chart points with the sample index on the x axis
pub fn chart_points(samples: &[ActivitySample]) -> Vec<(f64, f64)> {
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| (i as f64, sample.steps as f64))
        .collect()
}

/// X-axis bounds covering every sample index.
///
/// A single sample still gets a non-degenerate axis so the point lands on
/// the left edge instead of vanishing.
pub fn index_bounds(samples: &[ActivitySample]) -> [f64; 2] {
    [0.0, samples.len().saturating_sub(1).max(1) as f64]
}

/// Y-axis bounds rounded out so the line never hugs the frame
pub fn steps_bounds(samples: &[ActivitySample]) -> [f64; 2] {
    if samples.is_empty() {
        return [0.0, ROUND_TO];
    }

    let min = samples.iter().map(|s| s.steps).min().unwrap_or(0) as f64;
    let max = samples.iter().map(|s| s.steps).max().unwrap_or(0) as f64;

    let lo = (min / ROUND_TO).floor() * ROUND_TO;
    let mut hi = (max / ROUND_TO).ceil() * ROUND_TO;
    if hi <= lo {
        hi = lo + ROUND_TO;
    }

    [lo, hi]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(year: i32, month: u32, day: u32, steps: u32) -> ActivitySample {
        ActivitySample::new(NaiveDate::from_ymd_opt(year, month, day).unwrap(), steps)
    }

    #[test]
    fn test_chart_points_use_sample_index() {
        let samples = vec![
            sample(2024, 3, 1, 7500),
            sample(2024, 3, 2, 8200),
            sample(2024, 3, 3, 9100),
        ];

        let points = chart_points(&samples);
        assert_eq!(points, vec![(0.0, 7500.0), (1.0, 8200.0), (2.0, 9100.0)]);
    }

    #[test]
    fn test_axis_label_is_short_month_and_day() {
        assert_eq!(sample(2024, 3, 1, 0).axis_label(), "Mar 1");
        assert_eq!(sample(2024, 12, 25, 0).axis_label(), "Dec 25");
    }

    #[test]
    fn test_steps_bounds_round_outward() {
        let samples = vec![
            sample(2024, 3, 1, 7500),
            sample(2024, 3, 2, 8200),
            sample(2024, 3, 3, 9100),
        ];

        assert_eq!(steps_bounds(&samples), [7500.0, 9500.0]);
    }

    #[test]
    fn test_steps_bounds_never_collapse() {
        let flat = vec![sample(2024, 3, 1, 8000), sample(2024, 3, 2, 8000)];
        assert_eq!(steps_bounds(&flat), [8000.0, 8500.0]);

        assert_eq!(steps_bounds(&[]), [0.0, 500.0]);
    }

    #[test]
    fn test_index_bounds_survive_a_single_sample() {
        let one = vec![sample(2024, 3, 1, 7500)];
        assert_eq!(index_bounds(&one), [0.0, 1.0]);

        let four: Vec<ActivitySample> = (1..=4).map(|d| sample(2024, 3, d, 8000)).collect();
        assert_eq!(index_bounds(&four), [0.0, 3.0]);
    }
}
