// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini generateContent API request/response types.

use serde::{Deserialize, Serialize};

// --- Request types ---

/// A request to the Gemini generateContent endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents (a single user turn for this service).
    pub contents: Vec<Content>,

    /// Sampling and length settings.
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// A single content entry in the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Text parts making up this content entry.
    pub parts: Vec<Part>,
}

/// A text part within a content entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The text payload.
    pub text: String,
}

/// Generation settings for a request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: f64,

    /// Maximum tokens to generate.
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

// --- Response types ---

/// A response from the Gemini generateContent endpoint.
///
/// Every field is optional: a success status with an unexpected shape is
/// handled by falling back to a canned reply rather than erroring.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate completions, best first.
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// A single candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The candidate's content.
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content of a candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Text parts of the completion.
    #[serde(default)]
    pub parts: Option<Vec<Part>>,
}

impl GenerateContentResponse {
    /// The text of the first part of the first candidate, if present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()?
            .first()
            .map(|part| part.text.as_str())
    }
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Numeric status code echoed in the body.
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable error message.
    pub message: String,
    /// Symbolic status (e.g., "INVALID_ARGUMENT").
    #[serde(default)]
    pub status: Option<String>,
}
