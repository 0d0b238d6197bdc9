// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins, labels, chart configuration).

/// Default canvas width in pixels.
pub const WIDTH: u32 = 900;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 600;

/// Lower bound of the temperature axis. Matches the climate of the sample city.
pub const DEFAULT_VALUE_FLOOR: f64 = 14.0;

pub const TITLE: &str = "Temperature in San Francisco";
pub const X_LABEL: &str = "Time";
pub const Y_LABEL: &str = "Temperature";

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    /// Create new margins (non-negative by type), CSS order.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u64 { self.left as u64 + self.right as u64 }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u64 { self.top as u64 + self.bottom as u64 }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(120, 40, 88, 150)
    }
}

/// Everything a render needs besides the data. Built once per render and passed in.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    /// Fixed lower bound of the value scale domain.
    pub value_floor: f64,
    /// Approximate tick counts requested from the x and y scales.
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub tick_padding: f64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: Margin::default(),
            value_floor: DEFAULT_VALUE_FLOOR,
            x_ticks: 10,
            y_ticks: 10,
            tick_padding: 10.0,
            title: TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
        }
    }
}
