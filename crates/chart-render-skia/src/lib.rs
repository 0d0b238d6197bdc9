// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer; draws a composed chart scene to SVG (vector canvas) or PNG (CPU raster).

pub mod text;
pub mod theme;

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{Axis, ChartScene, PathCommand};
use skia_safe as skia;
use tracing::{debug, info};

pub use text::TextShaper;
pub use theme::Theme;

pub struct SkiaRenderer {
    pub theme: Theme,
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(Theme::default()) }
}

impl SkiaRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme, text: TextShaper::new() }
    }

    /// Render the scene as an SVG document.
    pub fn render_to_svg_bytes(&self, scene: &ChartScene) -> Result<Vec<u8>> {
        let bounds = skia::Rect::from_wh(scene.width as f32, scene.height as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, scene);
        let data = canvas.end();
        if data.is_empty() {
            anyhow::bail!("SVG canvas produced no output");
        }
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, scene: &ChartScene) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((scene.width as i32, scene.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), scene);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_svg(&self, scene: &ChartScene, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(scene)?;
        write_output(output_svg_path.as_ref(), &bytes)
    }

    pub fn render_to_png(&self, scene: &ChartScene, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene)?;
        write_output(output_png_path.as_ref(), &bytes)
    }

    fn draw(&self, canvas: &skia::Canvas, scene: &ChartScene) {
        canvas.clear(self.theme.background);

        // Everything below is in plot coordinates
        canvas.save();
        canvas.translate((scene.margin.left as f32, scene.margin.top as f32));

        self.draw_axis(canvas, &scene.y_axis);
        self.draw_axis(canvas, &scene.x_axis);
        self.text.draw(canvas, &scene.title, self.theme.title_font_size, self.theme.title);
        self.draw_line(canvas, &scene.line);

        canvas.restore();
        debug!(theme = self.theme.name, "drew chart scene");
    }

    // Grid-style axis: tick lines and labels, no domain line.
    fn draw_axis(&self, canvas: &skia::Canvas, axis: &Axis) {
        let mut grid = skia::Paint::default();
        grid.set_color(self.theme.grid);
        grid.set_anti_alias(true);
        grid.set_style(skia::paint::Style::Stroke);
        grid.set_stroke_width(1.0);

        for tick in &axis.ticks {
            let ((x1, y1), (x2, y2)) = axis.tick_line(tick);
            canvas.draw_line((x1 as f32, y1 as f32), (x2 as f32, y2 as f32), &grid);
            self.text.draw(canvas, &axis.tick_text(tick), self.theme.tick_font_size, self.theme.tick_label);
        }
        self.text.draw(canvas, &axis.label, self.theme.axis_font_size, self.theme.axis_label);
    }

    fn draw_line(&self, canvas: &skia::Canvas, cmds: &[PathCommand]) {
        if cmds.is_empty() {
            return;
        }
        let path = to_skia_path(cmds);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(self.theme.line_width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(self.theme.line_stroke);

        canvas.draw_path(&path, &stroke);
    }
}

/// Convert core path commands into a Skia path.
pub fn to_skia_path(cmds: &[PathCommand]) -> skia::Path {
    let pt = |(x, y): (f64, f64)| skia::Point::new(x as f32, y as f32);
    let mut path = skia::Path::new();
    for cmd in cmds {
        match *cmd {
            PathCommand::MoveTo(x, y) => { path.move_to(pt((x, y))); }
            PathCommand::LineTo(x, y) => { path.line_to(pt((x, y))); }
            PathCommand::CubicTo { c1, c2, to } => { path.cubic_to(pt(c1), pt(c2), pt(to)); }
            PathCommand::Close => { path.close(); }
        }
    }
    path
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
    Ok(())
}
