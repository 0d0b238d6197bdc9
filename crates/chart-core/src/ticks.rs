// File: crates/chart-core/src/ticks.rs
// Summary: Round tick steps for linear domains and calendar intervals for time domains.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, Utc};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Upper bound on any requested tick count.
pub const MAX_TICK_COUNT: usize = 1_000;

/// Integer tick bounds and increment for `[start, stop]` (start <= stop).
/// A negative increment means ticks are `i / -inc`, which keeps fractional steps exact.
fn tick_bounds(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    if !(count > 0.0) {
        return None;
    }
    let step = (stop - start) / count;
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let pos = 10f64.powf(-power) / factor;
        let mut i1 = (start * pos).round();
        let mut i2 = (stop * pos).round();
        if i1 / pos < start { i1 += 1.0; }
        if i2 / pos > stop { i2 -= 1.0; }
        (i1, i2, -pos)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
        (i1, i2, inc)
    };
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_bounds(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

/// Positive distance between consecutive ticks, or 0 when the span is empty.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    match tick_bounds(lo, hi, count.min(MAX_TICK_COUNT) as f64) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => 0.0,
    }
}

/// Roughly `count` round values (1, 2 or 5 times a power of ten apart) inside the domain,
/// in domain order.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_bounds(lo, hi, count.min(MAX_TICK_COUNT) as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let mut out = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect::<Vec<_>>();
    if reverse {
        out.reverse();
    }
    out
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    if !(step > 0.0) || !step.is_finite() {
        return 0;
    }
    let e = step.log10().floor();
    if e >= 0.0 { 0 } else { (-e) as usize }
}

/// Fixed-point tick label: comma thousands grouping and a U+2212 minus sign.
/// Values that round to zero lose their sign.
pub fn format_tick_value(v: f64, precision: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let digits = format!("{:.*}", precision, v.abs());
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + int.len() / 3 + 3);
    if v < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('\u{2212}');
    }
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

// ---- time ---------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    /// Weeks start on Sunday.
    Week,
    Month,
    Year,
}

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

// (unit, step, approximate duration in ms), ascending by duration.
const TICK_INTERVALS: [(TimeUnit, i64, i64); 18] = [
    (TimeUnit::Second, 1, SECOND),
    (TimeUnit::Second, 5, 5 * SECOND),
    (TimeUnit::Second, 15, 15 * SECOND),
    (TimeUnit::Second, 30, 30 * SECOND),
    (TimeUnit::Minute, 1, MINUTE),
    (TimeUnit::Minute, 5, 5 * MINUTE),
    (TimeUnit::Minute, 15, 15 * MINUTE),
    (TimeUnit::Minute, 30, 30 * MINUTE),
    (TimeUnit::Hour, 1, HOUR),
    (TimeUnit::Hour, 3, 3 * HOUR),
    (TimeUnit::Hour, 6, 6 * HOUR),
    (TimeUnit::Hour, 12, 12 * HOUR),
    (TimeUnit::Day, 1, DAY),
    (TimeUnit::Day, 2, 2 * DAY),
    (TimeUnit::Week, 1, WEEK),
    (TimeUnit::Month, 1, MONTH),
    (TimeUnit::Month, 3, 3 * MONTH),
    (TimeUnit::Year, 1, YEAR),
];

/// A calendar interval: every `step` units, aligned on the unit's field (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    pub unit: TimeUnit,
    pub step: i64,
}

impl TimeInterval {
    pub const fn new(unit: TimeUnit, step: i64) -> Self {
        Self { unit, step: if step < 1 { 1 } else { step } }
    }

    /// Pick the interval that yields close to `count` ticks across `[start, stop]`.
    pub fn for_span(start: DateTime<Utc>, stop: DateTime<Utc>, count: usize) -> Self {
        let a = start.timestamp_millis() as f64;
        let b = stop.timestamp_millis() as f64;
        let count = count.clamp(1, MAX_TICK_COUNT);
        let target = (b - a).abs() / count as f64;
        let i = TICK_INTERVALS.partition_point(|&(_, _, d)| (d as f64) <= target);

        if i == TICK_INTERVALS.len() {
            let step = tick_step(a / YEAR as f64, b / YEAR as f64, count).floor();
            return Self::new(TimeUnit::Year, step as i64);
        }
        if i == 0 {
            let step = tick_step(a, b, count).floor();
            return Self::new(TimeUnit::Millisecond, step as i64);
        }

        let lo = TICK_INTERVALS[i - 1];
        let hi = TICK_INTERVALS[i];
        let (unit, step, _) = if target / (lo.2 as f64) < (hi.2 as f64) / target { lo } else { hi };
        Self::new(unit, step)
    }

    /// Latest aligned boundary at or before `t`.
    pub fn floor(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        let k = self.step;
        let ms = t.timestamp_millis();
        let aligned = |unit_ms: i64, field_mod: i64| -> i64 {
            let base = ms - ms.rem_euclid(unit_ms);
            let field = (base / unit_ms).rem_euclid(field_mod);
            base - (field % k) * unit_ms
        };
        match self.unit {
            TimeUnit::Millisecond => from_millis(ms - ms.rem_euclid(k), t),
            TimeUnit::Second => from_millis(aligned(SECOND, 60), t),
            TimeUnit::Minute => from_millis(aligned(MINUTE, 60), t),
            TimeUnit::Hour => from_millis(aligned(HOUR, 24), t),
            TimeUnit::Day => {
                let midnight = ms - ms.rem_euclid(DAY);
                let field = (t.day0() as i64) % k;
                from_millis(midnight - field * DAY, t)
            }
            TimeUnit::Week => {
                let midnight = ms - ms.rem_euclid(DAY);
                let back = t.weekday().num_days_from_sunday() as i64;
                from_millis(midnight - back * DAY, t)
            }
            TimeUnit::Month => {
                let m0 = t.month0() as i64;
                first_of_month(t.year(), (m0 - m0 % k) as u32 + 1).unwrap_or(t)
            }
            TimeUnit::Year => {
                let y = t.year() as i64;
                first_of_month((y - y.rem_euclid(k)) as i32, 1).unwrap_or(t)
            }
        }
    }

    /// Earliest aligned boundary at or after `t`.
    pub fn ceil(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        let f = self.floor(t);
        if f == t {
            return t;
        }
        self.advance(f).unwrap_or(t)
    }

    /// Next aligned boundary strictly after an aligned instant.
    fn advance(&self, aligned: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let k = self.step;
        match self.unit {
            TimeUnit::Millisecond => aligned.checked_add_signed(TimeDelta::milliseconds(k)),
            TimeUnit::Second => aligned.checked_add_signed(TimeDelta::seconds(k)),
            TimeUnit::Minute => aligned.checked_add_signed(TimeDelta::minutes(k)),
            TimeUnit::Hour => aligned.checked_add_signed(TimeDelta::hours(k)),
            TimeUnit::Day => {
                // day-of-month alignment restarts every month
                let mut next = aligned.checked_add_signed(TimeDelta::days(1))?;
                while (next.day0() as i64) % k != 0 {
                    next = next.checked_add_signed(TimeDelta::days(1))?;
                }
                Some(next)
            }
            TimeUnit::Week => aligned.checked_add_signed(TimeDelta::weeks(1)),
            TimeUnit::Month => aligned.checked_add_months(Months::new(k as u32)),
            TimeUnit::Year => aligned.checked_add_months(Months::new(12 * k as u32)),
        }
    }

    /// Every aligned boundary in `[start, stop]`, ascending.
    pub fn range(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let mut out = Vec::new();
        let mut t = self.ceil(start);
        while t <= stop {
            out.push(t);
            match self.advance(t) {
                Some(next) if next > t => t = next,
                _ => break,
            }
        }
        out
    }
}

fn from_millis(ms: i64, fallback: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or(fallback)
}

fn first_of_month(year: i32, month: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

/// Label a time tick with the coarsest format that does not lose information:
/// milliseconds, seconds, minutes, hours, weekday, week start, month name, or year.
pub fn format_time_tick(t: DateTime<Utc>) -> String {
    let truncates = |unit: TimeUnit| TimeInterval::new(unit, 1).floor(t) < t;
    let fmt = if truncates(TimeUnit::Second) {
        ".%3f"
    } else if truncates(TimeUnit::Minute) {
        ":%S"
    } else if truncates(TimeUnit::Hour) {
        "%I:%M"
    } else if truncates(TimeUnit::Day) {
        "%I %p"
    } else if truncates(TimeUnit::Month) {
        if truncates(TimeUnit::Week) { "%a %d" } else { "%b %d" }
    } else if truncates(TimeUnit::Year) {
        "%B"
    } else {
        "%Y"
    };
    t.format(fmt).to_string()
}
