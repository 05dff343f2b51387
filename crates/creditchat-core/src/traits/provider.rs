// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation provider trait for the external text-generation service.

use async_trait::async_trait;

use crate::error::CreditChatError;

/// Sends a user message to the external generation service and returns
/// the completion text.
///
/// Implementations own the fixed system instruction that scopes the
/// assistant persona; callers pass the raw user message.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generates a response for the given user message.
    ///
    /// Fails with [`CreditChatError::Provider`] on transport failure or a
    /// non-success status. A success response with an unexpected payload
    /// shape yields a fixed fallback string instead of an error.
    async fn generate(&self, message: &str) -> Result<String, CreditChatError>;
}
