use std::path::PathBuf;

use serialplot::{ConfigError, PlotterConfig};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("serialplot-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_yaml_overrides() {
    let path = temp_file(
        "plot.yaml",
        "title: Bench\nsample_interval_ms: 5\ny_range: [-1.0, 1.0]\n",
    );
    let cfg = PlotterConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.title, "Bench");
    assert_eq!(cfg.sample_interval_ms, 5);
    assert_eq!(cfg.y_range, [-1.0, 1.0]);
    assert_eq!(cfg.tick_interval_ms, 100);
}

#[test]
fn loads_json_by_extension() {
    let path = temp_file("plot.json", r#"{ "tick_interval_ms": 40, "value_precision": 1 }"#);
    let cfg = PlotterConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.tick_interval_ms, 40);
    assert_eq!(cfg.value_precision, 1);
}

#[test]
fn invalid_values_are_reported() {
    let path = temp_file("bad.yaml", "y_range: [3.0, 1.0]\n");
    let err = PlotterConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = PlotterConfig::load("/nonexistent/serialplot.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("serialplot.yaml"));
}

#[test]
fn garbage_is_a_parse_error() {
    let path = temp_file("garbage.json", "{ not json");
    let err = PlotterConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
