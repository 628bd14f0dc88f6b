// ABOUTME: Behavioral tests for configuration loading and overrides
// Verifies defaults, file layering, env/flag precedence and the resulting API client

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use visa_intake::api::ApiClient;
use visa_intake::config::AppConfig;

/// With no config anywhere the client talks to the local dev backend
#[test]
fn test_defaults_point_at_local_backend() {
    let config = AppConfig::load_from_paths(&[]).unwrap();
    let api = ApiClient::from_config(&config.api).unwrap();

    assert_eq!(api.base_url(), "http://localhost:8000");
    assert_eq!(config.api.request_timeout_secs, None);
    assert_eq!(config.browser.command, None);
}

/// Files, then env, then the --api-url flag; each later layer wins
#[test]
fn test_full_precedence_chain() {
    let dir = TempDir::new().unwrap();
    let user = dir.path().join("user.toml");
    let project = dir.path().join("project.toml");
    fs::write(
        &user,
        "[api]\nbase_url = \"https://user.example\"\nrequest_timeout_secs = 20\n\n[browser]\ncommand = \"firefox\"\n",
    )
    .unwrap();
    fs::write(&project, "[api]\nbase_url = \"https://project.example/\"\n").unwrap();

    let mut config = AppConfig::load_from_paths(&[user, project]).unwrap();
    assert_eq!(config.api.base_url, "https://project.example/");
    // Keys a later file leaves out keep the earlier value
    assert_eq!(config.api.request_timeout_secs, Some(20));
    assert_eq!(config.browser.command.as_deref(), Some("firefox"));

    config
        .apply_env_overrides(Some("https://env.example".to_string()))
        .unwrap();
    assert_eq!(config.api.base_url, "https://env.example");

    config.set_api_url("http://flag.example:9000/").unwrap();
    let api = ApiClient::from_config(&config.api).unwrap();
    assert_eq!(api.base_url(), "http://flag.example:9000");
}

#[test]
fn test_blank_env_value_is_ignored() {
    let mut config = AppConfig::default();
    config.apply_env_overrides(Some("   ".to_string())).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:8000");
}

#[test]
fn test_invalid_flag_url_leaves_config_untouched() {
    let mut config = AppConfig::default();
    assert!(config.set_api_url("localhost:8000").is_err());
    assert!(config.set_api_url("ftp://files.example").is_err());
    assert_eq!(config.api.base_url, "http://localhost:8000");
}

#[test]
fn test_config_serializes_to_loadable_toml() {
    let mut config = AppConfig::default();
    config.api.request_timeout_secs = Some(45);
    config.browser.command = Some("xdg-open".to_string());

    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("request_timeout_secs = 45"));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, toml_str).unwrap();

    let loaded = AppConfig::load_from_paths(&[path]).unwrap();
    assert_eq!(loaded, config);
}
