// File: crates/temperature-chart/tests/pipeline.rs
// Purpose: End-to-end render from a CSV on disk to SVG/PNG files.

use std::path::{Path, PathBuf};

use temperature_chart::config::{AppConfig, InputConfig, OutputConfig};
use temperature_chart::run;

fn workdir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/pipeline").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create test dir");
    dir
}

fn config_for(dir: &Path, csv: &str) -> AppConfig {
    let input = dir.join("data.csv");
    std::fs::write(&input, csv).expect("write csv");
    AppConfig {
        input: InputConfig { path: input },
        output: OutputConfig { svg: dir.join("out/chart.svg"), png: Some(dir.join("out/chart.png")) },
        ..AppConfig::default()
    }
}

#[test]
fn renders_svg_and_png() {
    let dir = workdir("ok");
    let cfg = config_for(
        &dir,
        "timestamp,temperature\n2020-01-01 00:00:00,14\n2020-01-02 00:00:00,20\n2020-01-03 00:00:00,16\n",
    );
    let report = run(&cfg).expect("render");
    assert_eq!(report.points, 3);

    let svg = std::fs::read_to_string(&report.svg).expect("svg written");
    assert!(svg.contains("<svg"));
    let png = report.png.expect("png configured");
    assert!(std::fs::metadata(png).expect("png written").len() > 0);
}

#[test]
fn malformed_row_fails_the_render() {
    let dir = workdir("malformed");
    let cfg = config_for(&dir, "timestamp,temperature\n2020-01-01,14\n2020-01-02,warm\n");
    let err = run(&cfg).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("line 3"), "{msg}");
    assert!(msg.contains("temperature"), "{msg}");
    assert!(!dir.join("out/chart.svg").exists());
}

#[test]
fn degenerate_canvas_fails_before_drawing() {
    let dir = workdir("degenerate");
    let mut cfg = config_for(&dir, "timestamp,temperature\n2020-01-01,14\n");
    cfg.canvas.height = 150;
    let err = run(&cfg).unwrap_err();
    assert!(format!("{err:#}").contains("degenerate"));
    assert!(!dir.join("out/chart.svg").exists());
}

#[test]
fn empty_csv_fails_cleanly() {
    let dir = workdir("empty");
    let cfg = config_for(&dir, "timestamp,temperature\n");
    let err = run(&cfg).unwrap_err();
    assert!(format!("{err:#}").contains("no data points"));
}

#[test]
fn missing_input_names_the_file() {
    let dir = workdir("missing");
    let cfg = AppConfig {
        input: InputConfig { path: dir.join("nope.csv") },
        ..AppConfig::default()
    };
    let err = run(&cfg).unwrap_err();
    assert!(format!("{err:#}").contains("nope.csv"));
}
