// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaping and anchored drawing using Skia textlayout.

use chart_core::{Anchor, Baseline, TextMark};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `mark` with its anchor point at `(mark.x, mark.y)` in the current canvas space,
    /// rotated about that point.
    pub fn draw(&self, canvas: &skia::Canvas, mark: &TextMark, size: f32, color: skia::Color) {
        if mark.text.is_empty() {
            return;
        }
        let paragraph = self.layout(&mark.text, size, color);
        let width = paragraph.longest_line();
        let dx = match mark.anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => -width * 0.5,
            Anchor::End => -width,
        };
        // Paragraph paints from its top-left corner
        let dy = match mark.baseline {
            Baseline::Alphabetic => -paragraph.alphabetic_baseline(),
            Baseline::Middle => -paragraph.height() * 0.5,
            Baseline::Hanging => 0.0,
        };

        canvas.save();
        canvas.translate((mark.x as f32, mark.y as f32));
        if mark.rotation != 0.0 {
            canvas.rotate(mark.rotation as f32, None);
        }
        paragraph.paint(canvas, (dx, dy));
        canvas.restore();
    }
}
