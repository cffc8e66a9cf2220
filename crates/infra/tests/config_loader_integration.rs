//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use sse_auth_domain::{ProviderKind, Secret};
use sse_auth_infra::config;
use tempfile::Builder;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "redirect_uri": "http://127.0.0.1:8765",
        "popup": { "width": 500, "timeout_secs": 0 },
        "http": { "max_attempts": 1 },
        "providers": {
            "spotify": { "client_id": "sp-id", "client_secret": "sp-secret" },
            "twitter": { "client_id": "x-id", "client_secret": "x-secret", "email_required": true }
        }
    }"#;

    let mut temp_file = Builder::new().suffix(".json").tempfile().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from JSON file");

    assert_eq!(config.popup.width, 500);
    assert_eq!(config.popup.height, 700);
    assert!(config.popup.timeout().is_none());
    assert_eq!(config.http.max_attempts, 1);

    let spotify = config.login_options(ProviderKind::Spotify);
    assert_eq!(spotify.client_id(), Some("sp-id"));
    assert_eq!(spotify.redirect_uri.as_deref(), Some("http://127.0.0.1:8765"));

    let x = config.login_options(ProviderKind::X);
    assert!(x.email_required);
    assert_eq!(x.client_secret().map(Secret::expose), Some("x-secret"));
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[popup]
poll_interval_ms = 250

[providers.microsoft]
client_id = "ms-id"
client_secret = "ms-secret"
tenant = "common"
scope = ["openid", "User.Read"]

[providers."battle.net"]
client_id = "bn-id"
client_secret = "bn-secret"
region = "eu"
"#;

    let mut temp_file = Builder::new().suffix(".toml").tempfile().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.popup.poll_interval_ms, 250);

    let microsoft = config.login_options(ProviderKind::Microsoft);
    assert_eq!(microsoft.tenant.as_deref(), Some("common"));
    assert_eq!(microsoft.scope, vec!["openid", "User.Read"]);

    let battle_net = config.login_options(ProviderKind::BattleNet);
    assert_eq!(battle_net.region.as_deref(), Some("eu"));
}

#[test]
fn test_invalid_toml_reports_config_error() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().expect("Failed to create temp file");
    temp_file.write_all(b"[providers.github\nclient_id = ").expect("Failed to write to temp file");

    let err = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap_err();
    assert!(err.to_string().contains("Invalid TOML format"));
}

#[test]
fn test_unknown_provider_section_is_rejected() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().expect("Failed to create temp file");
    temp_file
        .write_all(b"[providers.myspace]\nclient_id = \"id\"\n")
        .expect("Failed to write to temp file");

    assert!(config::load_from_file(Some(temp_file.path().to_path_buf())).is_err());
}
