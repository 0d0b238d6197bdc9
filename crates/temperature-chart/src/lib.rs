// File: crates/temperature-chart/src/lib.rs
// Summary: Configuration and render pipeline for the temperature chart binary.

pub mod config;
pub mod pipeline;

pub use config::AppConfig;
pub use pipeline::{run, RenderReport};
