// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bearer-token verification against the external auth provider.
//!
//! The provider owns signup, login, and session issuance; this module
//! only resolves an access token to the identity it belongs to, via the
//! provider's `GET /auth/v1/user` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use creditchat_config::model::AuthConfig;
use creditchat_core::{CreditChatError, Identity, IdentityVerifier};
use serde::Deserialize;
use tracing::debug;

/// The subset of the provider's user object this service reads.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    email: String,
}

/// Verifies bearer tokens by calling the auth provider's user endpoint.
#[derive(Debug, Clone)]
pub struct HttpIdentityVerifier {
    client: reqwest::Client,
    provider_url: String,
    service_key: Option<String>,
}

impl HttpIdentityVerifier {
    /// Creates a verifier from configuration.
    ///
    /// Fails with [`CreditChatError::Config`] when no provider URL is set.
    pub fn new(config: &AuthConfig) -> Result<Self, CreditChatError> {
        let provider_url = config
            .provider_url
            .clone()
            .ok_or_else(|| CreditChatError::Config("auth.provider_url is not set".into()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CreditChatError::Auth {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            provider_url: provider_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        })
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, CreditChatError> {
        let mut request = self
            .client
            .get(format!("{}/auth/v1/user", self.provider_url))
            .bearer_auth(token);
        if let Some(key) = &self.service_key {
            request = request.header("apikey", key);
        }

        let response = request.send().await.map_err(|e| CreditChatError::Auth {
            message: format!("auth provider unreachable: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(status = %status, "auth provider response received");

        if !status.is_success() {
            return Err(CreditChatError::Auth {
                message: "Invalid token".into(),
                source: None,
            });
        }

        let user: ProviderUser =
            response.json().await.map_err(|e| CreditChatError::Auth {
                message: format!("malformed auth provider response: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Identity {
            id: user.id,
            email: user.email,
        })
    }
}
