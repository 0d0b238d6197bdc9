// File: crates/chart-core/src/data.rs
// Summary: Temperature observations and the CSV loader that produces them.

use std::io;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, info};

use crate::error::ChartError;

/// One observation. Collection order is file order; chronology is not enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
}

impl DataPoint {
    pub fn new(timestamp: DateTime<Utc>, temperature: f64) -> Self {
        Self { timestamp, temperature }
    }
}

const TIME_COLUMNS: &[&str] = &["timestamp", "time", "datetime"];
const TEMP_COLUMNS: &[&str] = &["temperature", "temp"];

// Naive forms are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

// Epoch seconds start at nine digits (1973-03-03).
const MIN_EPOCH_DIGITS: usize = 9;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Load observations from a CSV file with `timestamp` and `temperature` columns.
///
/// Any malformed row fails the whole load; rows are never skipped.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<DataPoint>, ChartError> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let points = read_points(rdr)?;
    info!(rows = points.len(), path = %path.display(), "loaded temperature data");
    Ok(points)
}

/// Same as [`load_csv`] but over any reader (used by tests and in-memory sources).
pub fn from_reader<R: io::Read>(reader: R) -> Result<Vec<DataPoint>, ChartError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    read_points(rdr)
}

fn read_points<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<DataPoint>, ChartError> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    // Aliases are ranked: an exact `timestamp`/`temperature` header wins over a later alias.
    let idx = |names: &[&str]| {
        names
            .iter()
            .find_map(|name| headers.iter().position(|h| h.as_str() == *name))
    };
    let i_time = idx(TIME_COLUMNS).ok_or(ChartError::MissingColumn("timestamp"))?;
    let i_temp = idx(TEMP_COLUMNS).ok_or(ChartError::MissingColumn("temperature"))?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or_default();

        let raw_time = rec.get(i_time).unwrap_or_default();
        let timestamp = parse_timestamp(raw_time).ok_or_else(|| ChartError::MalformedRow {
            line,
            field: "timestamp",
            value: raw_time.to_string(),
        })?;

        let raw_temp = rec.get(i_temp).unwrap_or_default();
        let temperature = raw_temp
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())
            .ok_or_else(|| ChartError::MalformedRow {
                line,
                field: "temperature",
                value: raw_temp.to_string(),
            })?;

        out.push(DataPoint { timestamp, temperature });
    }
    Ok(out)
}

/// Parse the date/time spellings found in sensor exports: RFC 3339 / RFC 2822,
/// ISO-like naive forms (read as UTC), plain and compact dates, and epoch seconds
/// (at least nine digits) or milliseconds.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Compact `YYYYMMDD` before the epoch forms, which would also accept it.
    if let Some(d) = parse_compact_date(s) {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.len() < MIN_EPOCH_DIGITS {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms vs epoch sec
        if n.abs() > 10_i64.pow(12) {
            return DateTime::from_timestamp_millis(n);
        }
        return DateTime::from_timestamp(n, 0);
    }
    None
}

fn parse_compact_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s[0..4].parse().ok()?;
    let month = s[4..6].parse().ok()?;
    let day = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
