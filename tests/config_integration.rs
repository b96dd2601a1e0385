//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use polyspin::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("PSPIN_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("PSPIN_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_viewer_env_override() {
    std::env::set_var("PSPIN_VIEWER__RAINBOW_SPEED", "7");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.viewer.rainbow_speed, 7);
    std::env::remove_var("PSPIN_VIEWER__RAINBOW_SPEED");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("PSPIN_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(
        cwd.join("config/default.toml").exists(),
        "config/default.toml should ship with the repository"
    );

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Polyspin");
    assert_eq!(config.viewer.surface_color, [255, 255, 0, 255]);
    assert_eq!(config.viewer.edge_color, [0, 0, 255, 255]);
    assert!(config.viewer.animate);
}
