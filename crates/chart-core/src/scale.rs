// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and value (Y) scales mapping data domains onto pixel ranges.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};

use crate::data::DataPoint;
use crate::error::ChartError;
use crate::layout::Layout;
use crate::ticks::{format_tick_value, format_time_tick, linear_ticks, precision_fixed, tick_step, TimeInterval};

/// Tick count used when rounding the time domain outward.
pub const NICE_COUNT: usize = 10;

/// Common scale operations. Implementations are pure and `Copy`.
pub trait Scale {
    type Domain: Copy;
    /// Domain value to pixel coordinate.
    fn map(&self, v: Self::Domain) -> f64;
    /// Pixel coordinate back to a domain value.
    fn invert(&self, px: f64) -> Self::Domain;
    /// Roughly `count` readable tick values inside the domain.
    fn ticks(&self, count: usize) -> Vec<Self::Domain>;
    /// Label for a tick produced by `ticks(count)`.
    fn tick_label(&self, v: Self::Domain, count: usize) -> String;
}

/// Linear mapping from `domain` onto `range`. Ranges may be inverted (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    #[inline]
    fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }

    fn tick_label(&self, v: f64, count: usize) -> String {
        let step = tick_step(self.domain.0, self.domain.1, count);
        format_tick_value(v, precision_fixed(step))
    }
}

/// Linear-in-time mapping from a UTC instant domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (DateTime<Utc>, DateTime<Utc>),
    pub range: (f64, f64),
}

impl TimeScale {
    pub const fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale over a data extent. A zero-width extent is widened by one second on each
    /// side so the single instant sits mid-range.
    pub fn from_extent(extent: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        let (t0, t1) = extent;
        if t0 == t1 {
            let pad = TimeDelta::seconds(1);
            return Self::new((t0 - pad, t1 + pad), range);
        }
        Self::new(extent, range)
    }

    /// Round the domain outward to the interval `count` ticks would use.
    pub fn nice(self, count: usize) -> Self {
        let (t0, t1) = self.domain;
        let reverse = t1 < t0;
        let (lo, hi) = if reverse { (t1, t0) } else { (t0, t1) };
        let interval = TimeInterval::for_span(lo, hi, count);
        let (lo, hi) = (interval.floor(lo), interval.ceil(hi));
        let domain = if reverse { (hi, lo) } else { (lo, hi) };
        Self { domain, ..self }
    }

    fn linear(&self) -> LinearScale {
        LinearScale::new(
            (millis(self.domain.0), millis(self.domain.1)),
            self.range,
        )
    }
}

#[inline]
fn millis(t: DateTime<Utc>) -> f64 {
    t.timestamp_millis() as f64
}

impl Scale for TimeScale {
    type Domain = DateTime<Utc>;

    #[inline]
    fn map(&self, t: DateTime<Utc>) -> f64 {
        self.linear().map(millis(t))
    }

    fn invert(&self, px: f64) -> DateTime<Utc> {
        let ms = self.linear().invert(px).round() as i64;
        DateTime::from_timestamp_millis(ms).unwrap_or(self.domain.0)
    }

    fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let (t0, t1) = self.domain;
        let reverse = t1 < t0;
        let (lo, hi) = if reverse { (t1, t0) } else { (t0, t1) };
        let mut out = TimeInterval::for_span(lo, hi, count).range(lo, hi);
        if reverse {
            out.reverse();
        }
        out
    }

    fn tick_label(&self, t: DateTime<Utc>, _count: usize) -> String {
        format_time_tick(t)
    }
}

/// `[min, max]` timestamp in one pass, `None` for empty input.
pub fn time_extent(data: &[DataPoint]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    data.iter().fold(None, |acc, p| match acc {
        None => Some((p.timestamp, p.timestamp)),
        Some((lo, hi)) => Some((lo.min(p.timestamp), hi.max(p.timestamp))),
    })
}

pub fn max_temperature(data: &[DataPoint]) -> Option<f64> {
    data.iter().map(|p| p.temperature).reduce(f64::max)
}

/// Value scale with a fixed floor. When the data never rises above the floor the domain
/// is widened to one unit so the mapping stays finite.
pub fn value_scale(floor: f64, max: f64, inner_height: f64) -> LinearScale {
    let top = if max > floor {
        max
    } else {
        warn!(floor, max, "temperature never exceeds the floor; widening value domain to 1");
        floor + 1.0
    };
    LinearScale::new((floor, top), (inner_height, 0.0))
}

/// The two scales the chart is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: LinearScale,
}

impl Scales {
    pub fn build(layout: &Layout, data: &[DataPoint], value_floor: f64) -> Result<Self, ChartError> {
        let extent = time_extent(data).ok_or(ChartError::EmptyData)?;
        let max = max_temperature(data).ok_or(ChartError::EmptyData)?;

        let x = TimeScale::from_extent(extent, (0.0, layout.inner_width)).nice(NICE_COUNT);
        let y = value_scale(value_floor, max, layout.inner_height);
        debug!(
            x_domain = ?x.domain,
            y_domain = ?y.domain,
            "built scales"
        );
        Ok(Self { x, y })
    }
}
