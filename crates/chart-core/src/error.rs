// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for loading, layout and scale construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: cannot parse {field} from '{value}'")]
    MalformedRow {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("plot area is degenerate ({inner_width}x{inner_height}); margins exceed the canvas")]
    DegenerateLayout { inner_width: i64, inner_height: i64 },

    #[error("no data points to scale")]
    EmptyData,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
