// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credit ledger trait: the per-identity integer balance and its accessors.

use async_trait::async_trait;

use crate::error::CreditChatError;

/// Reads and conditionally mutates the per-user credit balance.
///
/// The balance check and the debit are deliberately two separate calls
/// rather than one claim-then-generate transaction: the paid generation
/// call happens between them, and the pipeline only charges for answers
/// it actually produced. The debit itself is conditional at the store so
/// the balance can never go below zero even when concurrent requests
/// both pass the check.
#[async_trait]
pub trait CreditLedger: Send + Sync {
    /// Returns the current balance for the user.
    ///
    /// Fails with [`CreditChatError::ProfileNotFound`] when no profile
    /// row exists for the identity.
    async fn balance(&self, user_id: &str) -> Result<i64, CreditChatError>;

    /// Subtracts `amount` from the balance, flooring at zero, and returns
    /// the new balance.
    async fn debit(&self, user_id: &str, amount: i64) -> Result<i64, CreditChatError>;

    /// Adds `amount` to the balance and returns the new balance. Used by
    /// the purchase-confirmation path.
    async fn credit(&self, user_id: &str, amount: i64) -> Result<i64, CreditChatError>;
}
