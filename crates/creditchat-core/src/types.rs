// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Creditchat service.

use serde::{Deserialize, Serialize};

/// A verified user identity resolved from a bearer token by the external
/// auth provider. The `id` is opaque and immutable for the account lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

/// A per-user profile row holding the credit balance.
///
/// `credits` is the single integer balance owned by the ledger; it never
/// goes negative (enforced by the conditional debit at the store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub credits: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// One completed user message paired with its generated response.
///
/// Inserted only after generation succeeded; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub response: String,
    pub credits_used: i64,
    pub created_at: String,
}

impl ChatExchange {
    /// Build a completed exchange for the given user. Timestamps use the
    /// millisecond ISO-8601 format shared with the storage layer.
    pub fn completed(user_id: &str, message: &str, response: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            message: message.to_string(),
            response: response.to_string(),
            credits_used: 1,
            created_at: now_iso8601(),
        }
    }
}

/// A payment intent handle issued by the external processor (or synthesized
/// in placeholder mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorIntent {
    pub id: String,
    pub client_secret: String,
}

/// A fixed credit/price offer shown by the front end.
///
/// Presentation data only: the server accepts any positive integer credit
/// quantity, not just these packages, and the intent amount is always
/// computed from the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditPackage {
    pub credits: i64,
    pub price_usd: i64,
}

/// The package table shown by the storefront.
pub const CREDIT_PACKAGES: [CreditPackage; 4] = [
    CreditPackage { credits: 10, price_usd: 5 },
    CreditPackage { credits: 50, price_usd: 20 },
    CreditPackage { credits: 100, price_usd: 35 },
    CreditPackage { credits: 500, price_usd: 150 },
];

/// Current UTC time in the millisecond ISO-8601 format used for all
/// persisted timestamps.
pub fn now_iso8601() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}
