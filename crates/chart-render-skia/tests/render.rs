// File: crates/chart-render-skia/tests/render.rs
// Purpose: Render the sample scene to SVG and PNG and sanity-check the output.

use chart_core::{ChartConfig, ChartScene, DataPoint};
use chart_render_skia::{theme, to_skia_path, SkiaRenderer, Theme};
use chrono::{TimeZone, Utc};

fn scene() -> ChartScene {
    let data = vec![
        DataPoint::new(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(), 14.0),
        DataPoint::new(Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap(), 20.0),
        DataPoint::new(Utc.with_ymd_and_hms(2020, 1, 3, 0, 0, 0).unwrap(), 16.0),
    ];
    ChartScene::compose(&ChartConfig::default(), &data).expect("compose")
}

#[test]
fn svg_document_is_produced() {
    let bytes = SkiaRenderer::default().render_to_svg_bytes(&scene()).expect("svg");
    let svg = String::from_utf8(bytes).expect("utf-8 svg");
    assert!(svg.contains("<svg"), "missing svg root");
    assert!(svg.contains("<path"), "missing line path");
}

#[test]
fn png_matches_canvas_size_and_background() {
    let bytes = SkiaRenderer::new(Theme::light()).render_to_png_bytes(&scene()).expect("png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (900, 600));
    // top-left corner lies in the margin
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn theme_background_is_used() {
    let bytes = SkiaRenderer::new(Theme::dark()).render_to_png_bytes(&scene()).expect("png");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.get_pixel(899, 0).0, [18, 18, 20, 255]);
}

#[test]
fn files_are_written_with_parent_dirs() {
    let dir = std::path::PathBuf::from("target/test_out/render");
    let _ = std::fs::remove_dir_all(&dir);
    let renderer = SkiaRenderer::default();
    let s = scene();
    renderer.render_to_svg(&s, dir.join("chart.svg")).expect("write svg");
    renderer.render_to_png(&s, dir.join("nested/chart.png")).expect("write png");
    assert!(std::fs::metadata(dir.join("chart.svg")).expect("svg exists").len() > 0);
    assert!(std::fs::metadata(dir.join("nested/chart.png")).expect("png exists").len() > 0);
}

#[test]
fn smoothed_line_converts_verb_for_verb() {
    let path = to_skia_path(&scene().line);
    assert_eq!(path.count_verbs(), 5);
    assert_eq!(path.count_points(), 9);
}

#[test]
fn theme_lookup_by_name() {
    assert_eq!(theme::find("SOLARIZED-dark").name, "solarized-dark");
    assert_eq!(theme::find("no-such-theme").name, "light");
    assert_eq!(theme::presets().len(), 4);
}
