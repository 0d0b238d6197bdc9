// File: crates/temperature-chart/tests/config.rs
// Purpose: Configuration defaults, overrides and validation.

use chart_core::ChartConfig;
use std::path::PathBuf;
use temperature_chart::config::{from_toml_str, load, AppConfig};

fn workdir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/config").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create test dir");
    dir
}

#[test]
fn empty_file_means_defaults() {
    let cfg = from_toml_str("").expect("empty config");
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.to_chart_config(), ChartConfig::default());
    assert_eq!(cfg.input.path, PathBuf::from("data/data.csv"));
    assert_eq!(cfg.output.png, None);
}

#[test]
fn partial_sections_override_only_given_keys() {
    let cfg = from_toml_str(
        r#"
theme = "dark"

[canvas]
width = 1200

[scale]
value_floor = 10

[labels]
title = "Temperature in Oakland"

[output]
png = "out/chart.png"
"#,
    )
    .expect("config");

    assert_eq!(cfg.theme, "dark");
    assert_eq!(cfg.output.png, Some(PathBuf::from("out/chart.png")));

    let chart = cfg.to_chart_config();
    assert_eq!(chart.width, 1200);
    assert_eq!(chart.height, 600);
    assert_eq!(chart.value_floor, 10.0);
    assert_eq!(chart.title, "Temperature in Oakland");
    assert_eq!(chart.x_label, "Time");
    assert_eq!(chart.margin, chart_core::Margin::new(120, 40, 88, 150));
}

#[test]
fn invalid_values_are_rejected() {
    assert!(from_toml_str("[canvas]\nwidth = 0\n").is_err());
    assert!(from_toml_str("[scale]\nvalue_floor = nan\n").is_err());
    assert!(from_toml_str("[margin]\ntop = -5\n").is_err());
    assert!(from_toml_str("[scale]\ny_ticks = 0\n").is_err());
    assert!(from_toml_str("[scale]\nx_ticks = 1001\n").is_err());

    let err = from_toml_str("[scale]\ny_ticks = 1000000000000\n").unwrap_err();
    assert!(format!("{err:#}").contains("y_ticks"), "{err:#}");

    let cfg = from_toml_str("[scale]\nx_ticks = 1000\ny_ticks = 1\n").expect("bounds are inclusive");
    assert_eq!((cfg.scale.x_ticks, cfg.scale.y_ticks), (1000, 1));
}

#[test]
fn load_reads_explicit_file() {
    let dir = workdir("explicit");
    let path = dir.join("custom.toml");
    std::fs::write(&path, "theme = \"solarized-dark\"\n\n[canvas]\nheight = 480\n").expect("write config");

    let cfg = load(Some(path.as_path())).expect("load");
    assert_eq!(cfg.theme, "solarized-dark");
    assert_eq!(cfg.canvas.height, 480);
    assert_eq!(cfg.canvas.width, 900);
}

#[test]
fn load_requires_an_explicit_file_to_exist() {
    let dir = workdir("missing");
    let err = load(Some(dir.join("absent.toml").as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("reading chart configuration"), "{err:#}");
}

#[test]
fn load_rejects_invalid_explicit_file() {
    let dir = workdir("invalid");
    let path = dir.join("bad.toml");
    std::fs::write(&path, "[canvas]\nwidth = 0\n").expect("write config");
    assert!(load(Some(path.as_path())).is_err());
}

#[test]
fn load_without_path_falls_back_to_defaults() {
    // Tests run from the crate directory, which has no chart.toml.
    assert!(!std::path::Path::new(temperature_chart::config::DEFAULT_CONFIG_FILE).exists());
    let cfg = load(None).expect("defaults");
    assert_eq!(cfg, AppConfig::default());
}
