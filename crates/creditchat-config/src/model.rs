// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Creditchat service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Creditchat configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to values
/// that start a working demo instance (placeholder payments, no auth
/// provider delegation disabled).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CreditchatConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// External auth provider settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Gemini generation API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Stripe payment processor settings.
    #[serde(default)]
    pub stripe: StripeConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Credit pricing and history settings.
    #[serde(default)]
    pub credits: CreditsConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name of the service instance.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "creditchat".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server bind configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

/// External auth provider configuration.
///
/// The provider owns signup and session issuance; Creditchat only calls
/// its user-info endpoint to resolve bearer tokens to identities.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Base URL of the auth provider (e.g. `https://xyz.supabase.co`).
    /// `None` disables token verification and rejects all requests.
    #[serde(default)]
    pub provider_url: Option<String>,

    /// Service key sent as the `apikey` header on verification calls.
    #[serde(default)]
    pub service_key: Option<String>,
}

/// Gemini generation API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` requires the GEMINI_API_KEY env override.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier appended to the generateContent path.
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Sampling temperature for generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Output length bound, in tokens.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-pro".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    1000
}

/// Stripe payment processor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StripeConfig {
    /// Stripe secret key. `None` switches payment intents to the
    /// deterministic placeholder mode (fully functional demo path).
    #[serde(default)]
    pub secret_key: Option<String>,

    /// ISO currency code for created intents.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "usd".to_string()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL journal mode.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    "creditchat.db".to_string()
}

fn default_wal_mode() -> bool {
    true
}

/// Credit pricing and history configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CreditsConfig {
    /// Price of one credit in minor currency units.
    #[serde(default = "default_unit_price_minor")]
    pub unit_price_minor: i64,

    /// Credits charged per chat exchange.
    #[serde(default = "default_cost_per_message")]
    pub cost_per_message: i64,

    /// Bounded window for history replay.
    #[serde(default = "default_history_limit")]
    pub history_limit: i64,
}

impl Default for CreditsConfig {
    fn default() -> Self {
        Self {
            unit_price_minor: default_unit_price_minor(),
            cost_per_message: default_cost_per_message(),
            history_limit: default_history_limit(),
        }
    }
}

fn default_unit_price_minor() -> i64 {
    100
}

fn default_cost_per_message() -> i64 {
    1
}

fn default_history_limit() -> i64 {
    50
}
