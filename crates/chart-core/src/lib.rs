// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; data loading, layout, scales and chart scene composition.

pub mod axis;
pub mod chart;
pub mod curve;
pub mod data;
pub mod error;
pub mod layout;
pub mod scale;
pub mod ticks;
pub mod types;

pub use axis::{Anchor, Axis, Baseline, Orient, TextMark, Tick};
pub use chart::{map_points, ChartScene};
pub use curve::{basis, path_data, PathCommand};
pub use data::{load_csv, DataPoint};
pub use error::ChartError;
pub use layout::Layout;
pub use scale::{LinearScale, Scale, Scales, TimeScale};
pub use types::{ChartConfig, Margin};
