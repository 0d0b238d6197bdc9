// File: crates/chart-render-skia/src/theme.rs
// Summary: Colour and type presets for the temperature chart.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
    pub line_width: f32,
    pub tick_font_size: f32,
    pub axis_font_size: f32,
    pub title_font_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 220, 220, 220),
            tick_label: skia::Color::from_argb(255, 99, 86, 86),
            axis_label: skia::Color::from_argb(255, 99, 86, 86),
            title: skia::Color::from_argb(255, 40, 36, 36),
            line_stroke: skia::Color::from_argb(255, 123, 36, 28),
            line_width: 4.0,
            tick_font_size: 14.0,
            axis_font_size: 24.0,
            title_font_size: 32.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            axis_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            ..Self::light()
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            tick_label: skia::Color::from_argb(255, 0x83, 0x94, 0x96), // base0
            axis_label: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1), // base1
            title: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),      // base2
            line_stroke: skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
            ..Self::light()
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            tick_label: skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            axis_label: skia::Color::from_argb(255, 0x65, 0x7b, 0x83), // base00
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),      // base03
            line_stroke: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
            ..Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::solarized_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
