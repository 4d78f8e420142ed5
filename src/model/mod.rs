//! Model layer - dataset, metrics and timers
//!
//! This module contains the non-visual types:
//! - `DashboardData` - The immutable per-session dataset
//! - `Metric` / `MetricKind` - Goal-tracked readings and percent rules
//! - `ActivitySample` - Daily step counts behind the trend chart
//! - `TimerQueue` - Cancellable timers owned by the view

pub mod activity;
pub mod dataset;
pub mod metric;
pub mod timer;

// Re-export commonly used types
pub use activity::ActivitySample;
pub use dataset::{DashboardData, DatasetError};
pub use metric::{format_quantity, Metric, MetricError, MetricKind};
pub use timer::{TimerId, TimerQueue};
