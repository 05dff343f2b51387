// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini generateContent API.
//!
//! Provides [`GeminiClient`], which builds the single-turn request, sends
//! it with the API key in the query string, and extracts the completion
//! text from the first candidate.

use std::time::Duration;

use async_trait::async_trait;
use creditchat_config::model::GeminiConfig;
use creditchat_core::{CreditChatError, GenerationProvider};
use tracing::{debug, warn};

use crate::types::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};

/// Base URL for the Gemini API.
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Fixed instruction that scopes the assistant, prepended to every user
/// message as a single-turn prompt.
const SYSTEM_INSTRUCTION: &str = "You are a Python and Machine Learning coding assistant. \
     Only answer questions related to Python programming, Machine Learning, \
     Data Science, and related technologies.";

/// Canned reply used when a success response carries no candidate text.
const FALLBACK_RESPONSE: &str = "Sorry, I could not generate a response.";

/// HTTP client for Gemini API communication.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f64,
    max_output_tokens: u32,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini API client from configuration.
    ///
    /// Fails with [`CreditChatError::Config`] when no API key is set.
    pub fn new(config: &GeminiConfig) -> Result<Self, CreditChatError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| CreditChatError::Config("gemini.api_key is not set".into()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| CreditChatError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Sends a generateContent request and returns the completion text.
    pub async fn generate_content(&self, message: &str) -> Result<String, CreditChatError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{SYSTEM_INSTRUCTION} User question: {message}"),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| CreditChatError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "generateContent response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error_msg = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!("Gemini API error ({status}): {}", api_err.error.message)
            } else {
                format!("Gemini API returned {status}: {body}")
            };
            return Err(CreditChatError::Provider {
                message: error_msg,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| CreditChatError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| CreditChatError::Provider {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        match parsed.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                warn!("generateContent succeeded without candidate text, using fallback");
                Ok(FALLBACK_RESPONSE.to_string())
            }
        }
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(&self, message: &str) -> Result<String, CreditChatError> {
        self.generate_content(message).await
    }
}
