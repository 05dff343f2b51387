// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, sane sampling temperatures,
//! and positive credit pricing.

use crate::diagnostic::ConfigError;
use crate::model::CreditchatConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &CreditchatConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if !(0.0..=2.0).contains(&config.gemini.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "gemini.temperature must be between 0.0 and 2.0, got {}",
                config.gemini.temperature
            ),
        });
    }

    if config.gemini.max_output_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.max_output_tokens must be at least 1".to_string(),
        });
    }

    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.model must not be empty".to_string(),
        });
    }

    if config.credits.unit_price_minor <= 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "credits.unit_price_minor must be positive, got {}",
                config.credits.unit_price_minor
            ),
        });
    }

    if config.credits.cost_per_message <= 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "credits.cost_per_message must be positive, got {}",
                config.credits.cost_per_message
            ),
        });
    }

    if config.credits.history_limit <= 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "credits.history_limit must be positive, got {}",
                config.credits.history_limit
            ),
        });
    }

    if config.stripe.currency.len() != 3
        || !config.stripe.currency.chars().all(|c| c.is_ascii_lowercase())
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "stripe.currency must be a lowercase 3-letter ISO code, got `{}`",
                config.stripe.currency
            ),
        });
    }

    // A provider URL without a scheme is almost always a paste error.
    if let Some(url) = &config.auth.provider_url
        && !url.starts_with("http://")
        && !url.starts_with("https://")
    {
        errors.push(ConfigError::Validation {
            message: format!("auth.provider_url must start with http:// or https://, got `{url}`"),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CreditchatConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_host_is_rejected() {
        let mut config = CreditchatConfig::default();
        config.server.host = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("server.host")));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let mut config = CreditchatConfig::default();
        config.gemini.temperature = 3.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("gemini.temperature")));
    }

    #[test]
    fn nonpositive_pricing_is_rejected() {
        let mut config = CreditchatConfig::default();
        config.credits.unit_price_minor = 0;
        config.credits.history_limit = -1;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn uppercase_currency_is_rejected() {
        let mut config = CreditchatConfig::default();
        config.stripe.currency = "USD".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("currency")));
    }

    #[test]
    fn schemeless_auth_url_is_rejected() {
        let mut config = CreditchatConfig::default();
        config.auth.provider_url = Some("xyz.supabase.co".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("provider_url")));
    }

    #[test]
    fn all_errors_are_collected_not_just_the_first() {
        let mut config = CreditchatConfig::default();
        config.server.host = String::new();
        config.storage.database_path = String::new();
        config.gemini.model = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
