//! Configuration loading through the host config layer

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use blockfall::config::{AppConfig, ENV_CONFIG, ENV_SEED};
use blockfall::core::{ConfigError, EngineConfig, GameState, LineScoreRule};

fn temp_config(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("blockfall-{}-{}.json", name, std::process::id()));
    fs::write(&path, json).unwrap();
    path
}

fn from_pairs(pairs: &[(&str, String)]) -> anyhow::Result<AppConfig> {
    let map: HashMap<&str, String> = pairs.iter().cloned().collect();
    AppConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn engine_config_file_is_loaded() {
    let path = temp_config(
        "ok",
        r#"{ "width": 12, "line_score": "square", "hard_drop_points": 2 }"#,
    );
    let config = from_pairs(&[
        (ENV_CONFIG, path.display().to_string()),
        (ENV_SEED, "7".to_string()),
    ])
    .unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.engine.width, 12);
    assert_eq!(config.engine.height, 20);
    assert_eq!(config.engine.line_score, LineScoreRule::Square);
    assert_eq!(config.engine.hard_drop_points, 2);
    assert_eq!(config.seed, Some(7));

    let seed = config.resolve_seed();
    let state = GameState::try_new(config.engine, seed).unwrap();
    assert_eq!(state.board().width(), 12);
}

#[test]
fn invalid_engine_config_file_is_rejected() {
    let path = temp_config("bad", r#"{ "height": 2 }"#);
    let result = from_pairs(&[(ENV_CONFIG, path.display().to_string())]);
    fs::remove_file(&path).ok();

    let err = result.unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().expect("config error in chain");
    assert!(matches!(
        config_err,
        ConfigError::InvalidDimension { axis: "height", value: 2, .. }
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        EngineConfig::from_json_str("{ width: 10"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn engine_config_round_trips_through_json() {
    let config = EngineConfig::default()
        .with_size(8, 16)
        .with_line_score(LineScoreRule::Square)
        .with_drop_curve(800, 50, 80);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn try_new_reports_config_errors() {
    let config = EngineConfig::default().with_drop_curve(1000, 100, 0);
    assert!(matches!(
        GameState::try_new(config, 1),
        Err(ConfigError::InvalidDropTiming { min_ms: 0, .. })
    ));
}
