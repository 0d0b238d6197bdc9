// File: crates/chart-core/src/axis.rs
// Summary: Axis models (ticks, grid lines, labels) derived from scales, in plot coordinates.

use crate::scale::Scale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Vertical alignment of a text run relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    /// Anchor is the alphabetic baseline.
    Alphabetic,
    /// Anchor is the vertical centre of the glyphs.
    Middle,
    /// Anchor is the top of the glyphs.
    Hanging,
}

/// A positioned string. `rotation` is in degrees, clockwise, about the anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: Anchor,
    pub baseline: Baseline,
    pub rotation: f64,
}

impl TextMark {
    pub fn new(text: impl Into<String>, x: f64, y: f64, anchor: Anchor) -> Self {
        Self { text: text.into(), x, y, anchor, baseline: Baseline::Alphabetic, rotation: 0.0 }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis.
    pub offset: f64,
    pub label: String,
}

/// One axis. The axis line sits at `position` (y for a bottom axis, x for a left axis);
/// tick lines run `tick_size` pixels outward, so a negative size draws grid lines
/// across the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub position: f64,
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub label: TextMark,
}

impl Axis {
    pub fn from_scale<S: Scale>(
        orient: Orient,
        scale: &S,
        count: usize,
        position: f64,
        tick_size: f64,
        tick_padding: f64,
        label: TextMark,
    ) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { offset: scale.map(v), label: scale.tick_label(v, count) })
            .collect();
        Self { orient, position, ticks, tick_size, tick_padding, label }
    }

    /// Tick (or grid) line endpoints in plot coordinates.
    pub fn tick_line(&self, tick: &Tick) -> ((f64, f64), (f64, f64)) {
        match self.orient {
            Orient::Bottom => ((tick.offset, self.position), (tick.offset, self.position + self.tick_size)),
            Orient::Left => ((self.position, tick.offset), (self.position - self.tick_size, tick.offset)),
        }
    }

    /// Where a tick label goes. Labels sit outside the axis line, past positive tick size.
    pub fn tick_text(&self, tick: &Tick) -> TextMark {
        let gap = self.tick_size.max(0.0) + self.tick_padding;
        match self.orient {
            Orient::Bottom => TextMark {
                baseline: Baseline::Hanging,
                ..TextMark::new(tick.label.clone(), tick.offset, self.position + gap, Anchor::Middle)
            },
            Orient::Left => TextMark {
                baseline: Baseline::Middle,
                ..TextMark::new(tick.label.clone(), self.position - gap, tick.offset, Anchor::End)
            },
        }
    }
}
