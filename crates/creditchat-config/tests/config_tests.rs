// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Creditchat configuration system.

use creditchat_config::diagnostic::{suggest_key, ConfigError};
use creditchat_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[service]
name = "test-instance"
log_level = "debug"

[server]
host = "0.0.0.0"
port = 9100

[auth]
provider_url = "https://auth.example.com"
service_key = "svc-key"

[gemini]
api_key = "test-gemini-key"
model = "gemini-pro"
temperature = 0.7
max_output_tokens = 1000

[stripe]
secret_key = "sk_test_123"
currency = "usd"

[storage]
database_path = "/tmp/test.db"
wal_mode = false

[credits]
unit_price_minor = 100
cost_per_message = 1
history_limit = 25
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.service.name, "test-instance");
    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9100);
    assert_eq!(
        config.auth.provider_url.as_deref(),
        Some("https://auth.example.com")
    );
    assert_eq!(config.gemini.api_key.as_deref(), Some("test-gemini-key"));
    assert_eq!(config.stripe.secret_key.as_deref(), Some("sk_test_123"));
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.credits.history_limit, 25);
}

/// Unknown field in [gemini] produces an unknown-field error.
#[test]
fn unknown_field_in_gemini_produces_error() {
    let toml = r#"
[gemini]
api_kye = "test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kye"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing sections use defaults without error.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.service.name, "creditchat");
    assert_eq!(config.service.log_level, "info");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8787);
    assert!(config.auth.provider_url.is_none());
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "gemini-pro");
    assert!(config.stripe.secret_key.is_none());
    assert_eq!(config.stripe.currency, "usd");
    assert_eq!(config.storage.database_path, "creditchat.db");
    assert!(config.storage.wal_mode);
    assert_eq!(config.credits.unit_price_minor, 100);
    assert_eq!(config.credits.cost_per_message, 1);
    assert_eq!(config.credits.history_limit, 50);
}

/// load_and_validate_str converts unknown keys into diagnostics with a
/// typo suggestion.
#[test]
fn unknown_key_diagnostic_carries_suggestion() {
    let toml = r#"
[stripe]
secret_kye = "sk_test"
"#;

    let errors = load_and_validate_str(toml).expect_err("typo should be rejected");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey { key, suggestion, .. } => {
                Some((key.clone(), suggestion.clone()))
            }
            _ => None,
        })
        .expect("expected an UnknownKey diagnostic");
    assert_eq!(unknown.0, "secret_kye");
    assert_eq!(unknown.1.as_deref(), Some("secret_key"));
}

/// Semantic validation runs after deserialization and collects all errors.
#[test]
fn validation_errors_are_collected() {
    let toml = r#"
[gemini]
temperature = 9.0

[credits]
history_limit = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("invalid values should be rejected");
    assert!(errors.len() >= 2, "got {} errors", errors.len());
}

/// Wrong value type produces an invalid-type diagnostic, not a panic.
#[test]
fn invalid_type_is_reported() {
    let toml = r#"
[server]
port = "not-a-port"
"#;

    let errors = load_and_validate_str(toml).expect_err("string port should be rejected");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::InvalidType { .. } | ConfigError::Other(_)
    )));
}

/// The fuzzy matcher is conservative: distant strings get no suggestion.
#[test]
fn suggestion_threshold_filters_noise() {
    assert_eq!(suggest_key("qqqq", &["api_key", "model"]), None);
    assert_eq!(
        suggest_key("databse_path", &["database_path", "wal_mode"]),
        Some("database_path".to_string())
    );
}
