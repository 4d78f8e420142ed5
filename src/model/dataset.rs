//! The immutable dataset a dashboard session is constructed around

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::model::activity::ActivitySample;
use crate::model::metric::{Metric, MetricError, MetricKind};

/// Why a dataset was rejected before mounting the dashboard
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("{} goal must be positive, got {}", .kind.label(), .goal)]
    InvalidGoal { kind: MetricKind, goal: f64 },
    #[error("activity dates must be strictly increasing ({} then {})", .previous, .offending)]
    UnorderedActivities {
        previous: NaiveDate,
        offending: NaiveDate,
    },
}

/// Everything the dashboard renders, fixed for the whole session.
///
/// The view receives one of these at construction and never writes back to
/// it. The JSON shape accepted by [`DashboardData::load`] uses camelCase
/// keys, e.g. `"stepsGoal": 10000`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub steps: f64,
    pub steps_goal: f64,
    pub calories: f64,
    pub calories_goal: f64,
    pub water: f64,
    pub water_goal: f64,
    pub sleep: f64,
    pub sleep_goal: f64,
    pub weight: f64,
    #[serde(default)]
    pub mood: Option<String>,
    pub activities: Vec<ActivitySample>,
}

impl DashboardData {
    /// Built-in demo dataset used when no file is supplied
    pub fn sample() -> Self {
        let activities = [
            (2024, 3, 1, 7500),
            (2024, 3, 2, 8200),
            (2024, 3, 3, 9100),
            (2024, 3, 4, 8432),
        ]
        .into_iter()
        .filter_map(|(year, month, day, steps)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| ActivitySample::new(date, steps))
        })
        .collect();

        Self {
            steps: 8432.0,
            steps_goal: 10000.0,
            calories: 1850.0,
            calories_goal: 2500.0,
            water: 6.0,
            water_goal: 8.0,
            sleep: 7.5,
            sleep_goal: 8.0,
            weight: 70.5,
            mood: Some("energetic".to_string()),
            activities,
        }
    }

    /// The four goal metrics in display order
    pub fn metrics(&self) -> [Metric; 4] {
        [
            Metric::new(MetricKind::Steps, self.steps, self.steps_goal),
            Metric::new(MetricKind::Calories, self.calories, self.calories_goal),
            Metric::new(MetricKind::Water, self.water, self.water_goal),
            Metric::new(MetricKind::Sleep, self.sleep, self.sleep_goal),
        ]
    }

    /// The steps metric, which also drives the celebration check
    pub fn steps_metric(&self) -> Metric {
        Metric::new(MetricKind::Steps, self.steps, self.steps_goal)
    }

    /// Check every goal and the activity ordering.
    ///
    /// Runs once before the dashboard mounts so the render path never sees
    /// an invalid metric.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for metric in self.metrics() {
            if let Err(MetricError::InvalidGoal(goal)) = metric.percent() {
                return Err(DatasetError::InvalidGoal { kind: metric.kind, goal });
            }
        }

        for pair in self.activities.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(DatasetError::UnorderedActivities {
                    previous: pair[0].date,
                    offending: pair[1].date,
                });
            }
        }

        Ok(())
    }

    /// Load and validate a dataset from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;

        let data: Self = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;

        data.validate()?;
        Ok(data)
    }
}
