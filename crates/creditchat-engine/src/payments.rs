// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credit purchase flows: payment-intent creation and confirmation.
//!
//! When no processor is configured the issuer synthesizes placeholder
//! intent handles so the front end can exercise the full purchase flow
//! against a development deployment. The confirmation endpoint is the
//! placeholder-mode companion that actually grants the credits.

use std::sync::Arc;

use creditchat_core::{CreditLedger, Identity, PaymentProcessor};
use tracing::{debug, info};

use crate::error::ChatError;

/// Response payload for intent creation, identical in real and
/// placeholder mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentReply {
    pub client_secret: String,
    pub payment_intent_id: String,
    /// Charge amount in minor currency units.
    pub amount: i64,
    pub credits: i64,
}

/// Response payload for purchase confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmReply {
    pub credits_added: i64,
    pub remaining_credits: i64,
}

/// Issues payment intents and applies confirmed purchases to the ledger.
pub struct PaymentIssuer {
    ledger: Arc<dyn CreditLedger>,
    processor: Option<Arc<dyn PaymentProcessor>>,
    unit_price_minor: i64,
}

impl PaymentIssuer {
    pub fn new(
        ledger: Arc<dyn CreditLedger>,
        processor: Option<Arc<dyn PaymentProcessor>>,
        unit_price_minor: i64,
    ) -> Self {
        Self {
            ledger,
            processor,
            unit_price_minor,
        }
    }

    /// Creates a payment intent for `credits` credits.
    ///
    /// Any positive integer quantity is accepted; the package table is
    /// presentation data, not a server-side constraint.
    pub async fn create_intent(
        &self,
        identity: &Identity,
        credits: i64,
    ) -> Result<IntentReply, ChatError> {
        if credits < 1 {
            return Err(ChatError::InvalidInput("Invalid credit amount".into()));
        }

        let amount = credits * self.unit_price_minor;

        let (client_secret, payment_intent_id) = match &self.processor {
            Some(processor) => {
                let intent = processor
                    .create_intent(identity, credits, amount)
                    .await
                    .map_err(|e| {
                        ChatError::Internal(format!("failed to create payment intent: {e}"))
                    })?;
                (intent.client_secret, intent.id)
            }
            None => {
                // Placeholder handles keyed by wall-clock millis, matching
                // what the front end expects in development mode.
                let millis = chrono::Utc::now().timestamp_millis();
                (
                    format!("pi_test_{millis}_{}", identity.id),
                    format!("pi_test_{millis}"),
                )
            }
        };

        debug!(user_id = %identity.id, credits, amount, "payment intent created");
        Ok(IntentReply {
            client_secret,
            payment_intent_id,
            amount,
            credits,
        })
    }

    /// Applies a confirmed purchase to the ledger and returns the new
    /// balance. There is no idempotency key: retrying a confirmation
    /// grants the credits again.
    pub async fn confirm(
        &self,
        identity: &Identity,
        credits: i64,
    ) -> Result<ConfirmReply, ChatError> {
        if credits < 1 {
            return Err(ChatError::InvalidInput("Invalid credit amount".into()));
        }

        let remaining_credits = self.ledger.credit(&identity.id, credits).await?;
        info!(user_id = %identity.id, credits, remaining_credits, "purchase confirmed");
        Ok(ConfirmReply {
            credits_added: credits,
            remaining_credits,
        })
    }
}
