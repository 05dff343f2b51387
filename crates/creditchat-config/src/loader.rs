// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./creditchat.toml` >
//! `~/.config/creditchat/creditchat.toml` > `/etc/creditchat/creditchat.toml`
//! with environment variable overrides via the `CREDITCHAT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CreditchatConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/creditchat/creditchat.toml` (system-wide)
/// 3. `~/.config/creditchat/creditchat.toml` (user XDG config)
/// 4. `./creditchat.toml` (local directory)
/// 5. `CREDITCHAT_*` environment variables
pub fn load_config() -> Result<CreditchatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CreditchatConfig::default()))
        .merge(Toml::file("/etc/creditchat/creditchat.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("creditchat/creditchat.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("creditchat.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<CreditchatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CreditchatConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CreditchatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CreditchatConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `CREDITCHAT_GEMINI_API_KEY` must map to
/// `gemini.api_key`, not `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("CREDITCHAT_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped,
        // e.g. CREDITCHAT_STRIPE_SECRET_KEY -> "stripe_secret_key".
        let mapped = key
            .as_str()
            .replacen("service_", "service.", 1)
            .replacen("server_", "server.", 1)
            .replacen("auth_", "auth.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("stripe_", "stripe.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("credits_", "credits.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.service.name, "creditchat");
        assert_eq!(config.storage.database_path, "creditchat.db");
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [server]
            port = 9000

            [gemini]
            api_key = "test-key"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.gemini.api_key.as_deref(), Some("test-key"));
        // Untouched sections keep their defaults.
        assert_eq!(config.credits.history_limit, 50);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = load_config_from_str(
            r#"
            [credits]
            history_limt = 10
            "#,
        );
        assert!(result.is_err(), "deny_unknown_fields should reject the typo");
    }
}
