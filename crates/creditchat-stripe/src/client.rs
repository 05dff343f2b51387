// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for Stripe payment-intent creation.
//!
//! Stripe's API takes form-encoded bodies; the intent metadata travels as
//! a single JSON-stringified form field.

use std::time::Duration;

use async_trait::async_trait;
use creditchat_config::model::StripeConfig;
use creditchat_core::{CreditChatError, Identity, PaymentProcessor, ProcessorIntent};
use tracing::debug;

use crate::types::{IntentMetadata, PaymentIntentResponse, StripeErrorResponse};

/// Base URL for the Stripe API.
const API_BASE_URL: &str = "https://api.stripe.com";

/// HTTP client for Stripe API communication.
#[derive(Debug, Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    secret_key: String,
    currency: String,
    base_url: String,
}

impl StripeClient {
    /// Creates a new Stripe API client from configuration.
    ///
    /// Fails with [`CreditChatError::Config`] when no secret key is set;
    /// callers that tolerate a missing key should check the config before
    /// constructing the client.
    pub fn new(config: &StripeConfig) -> Result<Self, CreditChatError> {
        let secret_key = config
            .secret_key
            .clone()
            .ok_or_else(|| CreditChatError::Config("stripe.secret_key is not set".into()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CreditChatError::Payment {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            secret_key,
            currency: config.currency.clone(),
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Creates a payment intent and returns its id and client secret.
    pub async fn create_payment_intent(
        &self,
        identity: &Identity,
        credits: i64,
        amount_minor: i64,
    ) -> Result<ProcessorIntent, CreditChatError> {
        let metadata = IntentMetadata {
            user_id: identity.id.clone(),
            email: identity.email.clone(),
            credits: credits.to_string(),
        };
        let metadata_json =
            serde_json::to_string(&metadata).map_err(|e| CreditChatError::Payment {
                message: format!("failed to encode intent metadata: {e}"),
                source: Some(Box::new(e)),
            })?;

        let form = [
            ("amount", amount_minor.to_string()),
            ("currency", self.currency.clone()),
            ("metadata", metadata_json),
            ("description", format!("{credits} AI Chat Credits")),
        ];

        let response = self
            .client
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| CreditChatError::Payment {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, credits, amount_minor, "payment intent response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error_msg = if let Ok(api_err) = serde_json::from_str::<StripeErrorResponse>(&body)
            {
                format!(
                    "Stripe API error ({status}): {}",
                    api_err.error.message.unwrap_or_else(|| "unknown".into())
                )
            } else {
                format!("Stripe API returned {status}: {body}")
            };
            return Err(CreditChatError::Payment {
                message: error_msg,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| CreditChatError::Payment {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let intent: PaymentIntentResponse =
            serde_json::from_str(&body).map_err(|e| CreditChatError::Payment {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(ProcessorIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}

#[async_trait]
impl PaymentProcessor for StripeClient {
    async fn create_intent(
        &self,
        identity: &Identity,
        credits: i64,
        amount_minor: i64,
    ) -> Result<ProcessorIntent, CreditChatError> {
        self.create_payment_intent(identity, credits, amount_minor)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> StripeConfig {
        StripeConfig {
            secret_key: Some("sk_test_abc".into()),
            currency: "usd".into(),
        }
    }

    fn test_client(base_url: &str) -> StripeClient {
        StripeClient::new(&test_config())
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn test_identity() -> Identity {
        Identity {
            id: "u1".into(),
            email: "u1@example.com".into(),
        }
    }

    #[test]
    fn new_fails_without_secret_key() {
        let config = StripeConfig {
            secret_key: None,
            currency: "usd".into(),
        };
        assert!(matches!(
            StripeClient::new(&config),
            Err(CreditChatError::Config(_))
        ));
    }

    #[tokio::test]
    async fn create_intent_returns_id_and_secret() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "id": "pi_3abc",
            "client_secret": "pi_3abc_secret_xyz",
            "amount": 5000,
            "currency": "usd"
        });

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .and(header("authorization", "Bearer sk_test_abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let intent = client
            .create_payment_intent(&test_identity(), 50, 5000)
            .await
            .unwrap();
        assert_eq!(intent.id, "pi_3abc");
        assert_eq!(intent.client_secret, "pi_3abc_secret_xyz");
    }

    #[tokio::test]
    async fn form_body_carries_amount_currency_and_metadata() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "id": "pi_form",
            "client_secret": "pi_form_secret"
        });

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .and(body_string_contains("amount=5000"))
            .and(body_string_contains("currency=usd"))
            .and(body_string_contains("50+AI+Chat+Credits"))
            .and(body_string_contains("u1%40example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.create_payment_intent(&test_identity(), 50, 5000).await;
        assert!(result.is_ok(), "form body should match: {result:?}");
    }

    #[tokio::test]
    async fn stripe_error_surfaces_as_payment_error() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"type": "invalid_request_error", "message": "Amount must be positive"}
        });

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .create_payment_intent(&test_identity(), 0, 0)
            .await
            .unwrap_err();
        assert!(
            err.to_string().contains("Amount must be positive"),
            "got: {err}"
        );
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_payment_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .create_payment_intent(&test_identity(), 10, 1000)
            .await
            .unwrap_err();
        assert!(matches!(err, CreditChatError::Payment { .. }));
    }
}
