// File: crates/temperature-chart/src/pipeline.rs
// Summary: One-shot render: load CSV, compose the scene, draw SVG (and PNG), write files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{load_csv, ChartScene};
use chart_render_skia::{theme, SkiaRenderer};
use tracing::{info, warn};

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub points: usize,
    pub svg: PathBuf,
    pub png: Option<PathBuf>,
}

pub fn run(cfg: &AppConfig) -> Result<RenderReport> {
    let input = &cfg.input.path;
    let data = load_csv(input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;

    let scene = ChartScene::compose(&cfg.to_chart_config(), &data).context("failed to compose chart")?;
    info!(
        points = scene.points.len(),
        x_from = %scene.scales.x.domain.0,
        x_to = %scene.scales.x.domain.1,
        "chart composed"
    );

    if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&cfg.theme)) {
        warn!(theme = %cfg.theme, "unknown theme, using light");
    }
    let renderer = SkiaRenderer::new(theme::find(&cfg.theme));

    renderer
        .render_to_svg(&scene, &cfg.output.svg)
        .with_context(|| format!("failed to render SVG '{}'", cfg.output.svg.display()))?;
    if let Some(png) = &cfg.output.png {
        renderer
            .render_to_png(&scene, png)
            .with_context(|| format!("failed to render PNG '{}'", png.display()))?;
    }

    Ok(RenderReport {
        points: scene.points.len(),
        svg: cfg.output.svg.clone(),
        png: cfg.output.png.clone(),
    })
}
