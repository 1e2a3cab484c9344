//! Unit tests for config file load/save.

use swipekit::input::SwipeConfigOverrides;
use swipekit::storage::config::{load_config_from, save_config_to, AppConfig, ConfigError};
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = AppConfig {
        swipe: SwipeConfigOverrides::default()
            .with_velocity_threshold(0.45)
            .with_need_vertical_scroll(true)
            .with_scroll_vertical_threshold(12.0),
        ..Default::default()
    };
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);

    let swipe = loaded.swipe_config().unwrap();
    assert_eq!(swipe.velocity_threshold(), 0.45);
    assert_eq!(swipe.scroll_vertical_threshold(), 12.0);
    assert_eq!(swipe.gesture_is_click_threshold(), 5.0);
}

#[test]
fn test_camel_case_keys_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[swipe]\nvelocityThreshold = 0.6\ndirectionalOffsetThreshold = 40\nswipeEnabled = false\n",
    )
    .unwrap();

    let swipe = load_config_from(&path).unwrap().swipe_config().unwrap();
    assert_eq!(swipe.velocity_threshold(), 0.6);
    assert_eq!(swipe.directional_offset_threshold(), 40.0);
    assert!(!swipe.swipe_enabled());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[swipe\nvelocity_threshold = ").unwrap();

    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_negative_threshold_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[swipe]\ngesture_is_click_threshold = -3.0\n").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("gesture_is_click_threshold"));
}
