// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payment processor trait for external payment-intent creation.

use async_trait::async_trait;

use crate::error::CreditChatError;
use crate::types::{Identity, ProcessorIntent};

/// Creates payment intents with the external payment processor.
///
/// The issuer falls back to a synthesized placeholder handle when no
/// processor is configured, so this trait is only exercised on the real
/// path.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Creates a payment intent for `amount_minor` minor currency units,
    /// tagged with the purchasing identity and credit quantity.
    async fn create_intent(
        &self,
        identity: &Identity,
        credits: i64,
        amount_minor: i64,
    ) -> Result<ProcessorIntent, CreditChatError>;
}
