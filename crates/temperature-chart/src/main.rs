// File: crates/temperature-chart/src/main.rs
// Summary: Render the temperature chart described by a TOML config (default: ./chart.toml).

use std::path::PathBuf;

use anyhow::Result;
use temperature_chart::{config, pipeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let cfg = config::load(config_path.as_deref())?;
    info!(input = %cfg.input.path.display(), theme = %cfg.theme, "configuration loaded");

    let report = pipeline::run(&cfg)?;
    info!(points = report.points, svg = %report.svg.display(), "done");
    if let Some(png) = &report.png {
        info!(png = %png.display(), "also wrote PNG");
    }
    Ok(())
}
