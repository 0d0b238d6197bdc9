// File: crates/chart-core/src/layout.rs
// Summary: Plot-area geometry derived from canvas size and margins.

use crate::error::ChartError;
use crate::types::Margin;

/// Size of the drawable area inside the margins.
/// Invariant: both dimensions are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Layout {
    /// Subtract margins from the canvas. Fails when either inner dimension is not positive,
    /// in which case no scales can be built.
    pub fn plan(width: u32, height: u32, margin: &Margin) -> Result<Self, ChartError> {
        let inner_width = width as i64 - margin.hsum() as i64;
        let inner_height = height as i64 - margin.vsum() as i64;
        if inner_width <= 0 || inner_height <= 0 {
            return Err(ChartError::DegenerateLayout { inner_width, inner_height });
        }
        Ok(Self {
            inner_width: inner_width as f64,
            inner_height: inner_height as f64,
        })
    }
}
