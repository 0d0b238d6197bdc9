// File: crates/temperature-chart/src/config.rs
// Summary: TOML configuration (input, output, canvas, margins, scale, labels, theme).

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use chart_core::ticks::MAX_TICK_COUNT;
use chart_core::{ChartConfig, Margin};
use serde::Deserialize;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "chart.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: String,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub canvas: CanvasConfig,
    pub margin: MarginConfig,
    pub scale: ScaleConfig,
    pub labels: LabelsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub svg: PathBuf,
    pub png: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScaleConfig {
    pub value_floor: f64,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub tick_padding: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LabelsConfig {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
            canvas: CanvasConfig::default(),
            margin: MarginConfig::default(),
            scale: ScaleConfig::default(),
            labels: LabelsConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("data/data.csv") }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { svg: PathBuf::from("target/out/temperature.svg"), png: None }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let c = ChartConfig::default();
        Self { width: c.width, height: c.height }
    }
}

impl Default for MarginConfig {
    fn default() -> Self {
        let m = Margin::default();
        Self { top: m.top, right: m.right, bottom: m.bottom, left: m.left }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        let c = ChartConfig::default();
        Self {
            value_floor: c.value_floor,
            x_ticks: c.x_ticks,
            y_ticks: c.y_ticks,
            tick_padding: c.tick_padding,
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        let c = ChartConfig::default();
        Self { title: c.title, x_axis: c.x_label, y_axis: c.y_label }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.canvas.width > 0 && self.canvas.height > 0, "canvas size must be positive");
        ensure!(self.scale.value_floor.is_finite(), "scale.value_floor must be a finite number");
        for (key, count) in [("x_ticks", self.scale.x_ticks), ("y_ticks", self.scale.y_ticks)] {
            ensure!(
                (1..=MAX_TICK_COUNT).contains(&count),
                "scale.{key} must be between 1 and {MAX_TICK_COUNT}, got {count}"
            );
        }
        ensure!(
            self.scale.tick_padding.is_finite() && self.scale.tick_padding >= 0.0,
            "scale.tick_padding must be non-negative"
        );
        Ok(())
    }

    /// The explicit configuration handed to the core pipeline.
    pub fn to_chart_config(&self) -> ChartConfig {
        ChartConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            margin: Margin::new(self.margin.top, self.margin.right, self.margin.bottom, self.margin.left),
            value_floor: self.scale.value_floor,
            x_ticks: self.scale.x_ticks,
            y_ticks: self.scale.y_ticks,
            tick_padding: self.scale.tick_padding,
            title: self.labels.title.clone(),
            x_label: self.labels.x_axis.clone(),
            y_label: self.labels.y_axis.clone(),
        }
    }
}

/// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] if present.
/// Missing keys take their defaults.
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    let builder = config::Config::builder();
    let builder = match path {
        Some(p) => builder.add_source(config::File::from(p).required(true)),
        None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
    };
    let settings = builder.build().context("reading chart configuration")?;
    finish(settings)
}

/// Parse configuration from TOML text.
pub fn from_toml_str(s: &str) -> Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(s, config::FileFormat::Toml))
        .build()
        .context("reading chart configuration")?;
    finish(settings)
}

fn finish(settings: config::Config) -> Result<AppConfig> {
    let cfg: AppConfig = settings.try_deserialize().context("invalid chart configuration")?;
    cfg.validate()?;
    Ok(cfg)
}
