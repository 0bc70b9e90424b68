use std::time::Duration;

use flowifier_client::config::CliConfig;

#[test]
fn test_load_example_config() {
    let config_path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/example.toml");
    let config = CliConfig::from_file(config_path).expect("Failed to load config");

    assert_eq!(config.app_url(), Some("http://127.0.0.1:8080"));
    assert_eq!(config.poll_interval(), Duration::from_millis(500));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = CliConfig::from_file("/nonexistent/flowifier.toml");
    assert!(result.is_err());
}
