// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stripe payment-intent API types.

use serde::{Deserialize, Serialize};

/// Metadata attached to a payment intent, JSON-stringified into the
/// form-encoded `metadata` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentMetadata {
    /// Purchasing user's id.
    pub user_id: String,
    /// Purchasing user's email.
    pub email: String,
    /// Credit quantity being purchased, as a decimal string.
    pub credits: String,
}

/// The subset of Stripe's payment-intent object this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentResponse {
    /// Payment intent id (e.g., "pi_...").
    pub id: String,
    /// Client secret handed to the browser for confirmation.
    pub client_secret: String,
}

/// Stripe API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Error detail within a Stripe error response.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type identifier (e.g., "invalid_request_error").
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
}
