use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use synthwave_grid::config::{AppConfig, ENV_CONFIG, ENV_FPS, ENV_LOG_PATH, ENV_SEED};
use synthwave_grid::types::GridConfig;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("synthwave-{}-{name}.json", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let path = temp_config("partial", r#"{ "columns": 12, "z_speed": 45.0 }"#);
    let config = AppConfig::from_lookup(lookup(&[(ENV_CONFIG, path.to_str().unwrap())])).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.grid.columns, 12);
    assert_eq!(config.grid.z_speed, 45.0);
    assert_eq!(config.grid.rows, GridConfig::default().rows);
    assert_eq!(config.grid.focal_length, GridConfig::default().focal_length);
}

#[test]
fn seed_fps_and_log_path_are_read() {
    let config = AppConfig::from_lookup(lookup(&[
        (ENV_SEED, "42"),
        (ENV_FPS, "30"),
        (ENV_LOG_PATH, " /tmp/synthwave.log "),
    ]))
    .unwrap();

    assert_eq!(config.seed, Some(42));
    assert_eq!(config.frame_interval_ms, 33);
    assert_eq!(config.log_path.as_deref(), Some("/tmp/synthwave.log"));
}

#[test]
fn garbage_numbers_fall_back_to_defaults() {
    let config = AppConfig::from_lookup(lookup(&[(ENV_SEED, "soon"), (ENV_FPS, "fast")])).unwrap();
    assert_eq!(config.seed, None);
    assert_eq!(config.frame_interval_ms, AppConfig::default().frame_interval_ms);
}

#[test]
fn blank_values_are_ignored() {
    let config = AppConfig::from_lookup(lookup(&[(ENV_CONFIG, "  "), (ENV_LOG_PATH, "")])).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn missing_config_file_is_an_error() {
    let err = AppConfig::from_lookup(lookup(&[(ENV_CONFIG, "/nonexistent/synthwave/grid.json")]))
        .unwrap_err();
    assert!(format!("{err:#}").contains("reading grid config"));
}

#[test]
fn malformed_config_file_is_an_error() {
    let path = temp_config("malformed", "{ columns: ");
    let result = AppConfig::from_lookup(lookup(&[(ENV_CONFIG, path.to_str().unwrap())]));
    fs::remove_file(&path).ok();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("parsing grid config"));
}

#[test]
fn invalid_grid_is_rejected() {
    let path = temp_config("invalid", r#"{ "max_depth": 25.0 }"#);
    let result = AppConfig::from_lookup(lookup(&[(ENV_CONFIG, path.to_str().unwrap())]));
    fs::remove_file(&path).ok();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("max depth"));
}

#[test]
fn serialized_grid_config_loads_back() {
    let grid = GridConfig {
        columns: 24,
        rows: 12,
        spacing: 25.0,
        depth_spacing: 15.0,
        focal_length: 250.0,
        z_speed: 60.0,
        max_depth: -150.0,
    };
    let path = temp_config("full", &serde_json::to_string_pretty(&grid).unwrap());
    let config = AppConfig::from_lookup(lookup(&[(ENV_CONFIG, path.to_str().unwrap())])).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.grid, grid);
}
