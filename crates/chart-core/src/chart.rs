// File: crates/chart-core/src/chart.rs
// Summary: Scene composition; layout, scales, mapped points, smoothed line, axes and title.

use tracing::debug;

use crate::axis::{Anchor, Axis, Orient, TextMark};
use crate::curve::{basis, PathCommand};
use crate::data::DataPoint;
use crate::error::ChartError;
use crate::layout::Layout;
use crate::scale::{Scale, Scales};
use crate::types::{ChartConfig, Margin};

/// Offsets of the decorations from the plot edges, in pixels.
const TITLE_OFFSET: f64 = -20.0;
const X_LABEL_OFFSET: f64 = 50.0;
const Y_LABEL_OFFSET: f64 = -40.0;

/// Everything a renderer needs to draw the chart. Coordinates other than `width`,
/// `height` and `margin` are relative to the plot origin `(margin.left, margin.top)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScene {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub layout: Layout,
    pub scales: Scales,
    /// One pixel pair per data point, in input order.
    pub points: Vec<(f64, f64)>,
    pub line: Vec<PathCommand>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: TextMark,
}

impl ChartScene {
    /// Run the pure part of the pipeline: plan, scale, map, smooth, decorate.
    pub fn compose(config: &ChartConfig, data: &[DataPoint]) -> Result<Self, ChartError> {
        let layout = Layout::plan(config.width, config.height, &config.margin)?;
        let scales = Scales::build(&layout, data, config.value_floor)?;
        let points = map_points(data, &scales);
        let line = basis(&points);

        let Layout { inner_width, inner_height } = layout;

        let x_label = TextMark::new(
            config.x_label.clone(),
            inner_width / 2.0,
            inner_height + X_LABEL_OFFSET,
            Anchor::Middle,
        );
        let x_axis = Axis::from_scale(
            Orient::Bottom,
            &scales.x,
            config.x_ticks,
            inner_height,
            -inner_height,
            config.tick_padding,
            x_label,
        );

        // rotated -90 degrees about its anchor, left of the tick labels
        let y_label = TextMark::new(
            config.y_label.clone(),
            Y_LABEL_OFFSET,
            inner_height / 2.0,
            Anchor::Middle,
        )
        .rotated(-90.0);
        let y_axis = Axis::from_scale(
            Orient::Left,
            &scales.y,
            config.y_ticks,
            0.0,
            -inner_width,
            config.tick_padding,
            y_label,
        );

        let title = TextMark::new(config.title.clone(), inner_width / 3.0, TITLE_OFFSET, Anchor::Start);

        debug!(
            inner_width,
            inner_height,
            points = points.len(),
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            "composed chart scene"
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            margin: config.margin,
            layout,
            scales,
            points,
            line,
            x_axis,
            y_axis,
            title,
        })
    }
}

/// Map each observation to plot coordinates, preserving input order.
pub fn map_points(data: &[DataPoint], scales: &Scales) -> Vec<(f64, f64)> {
    data.iter()
        .map(|p| (scales.x.map(p.timestamp), scales.y.map(p.temperature)))
        .collect()
}
