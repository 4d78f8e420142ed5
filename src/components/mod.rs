//! UI Components
//!
//! The dashboard is the only stateful component; everything else is a pure
//! render function fed from its state and the injected dataset.

pub mod celebration;
pub mod dashboard;
pub mod header;
pub mod info_tiles;
pub mod layout;
pub mod nutrition;
pub mod progress_card;
pub mod trend_chart;

pub use celebration::draw_celebration;
pub use dashboard::DashboardComponent;
pub use header::{draw_header, HeaderContext};
pub use info_tiles::{build_info_tiles, draw_info_tiles, InfoTile};
pub use layout::{calculate_dashboard_layout, centered_popup, DashboardLayout};
pub use nutrition::draw_nutrition;
pub use progress_card::draw_progress_card;
pub use trend_chart::draw_trend_chart;
