// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation log trait for persisting and replaying chat exchanges.

use async_trait::async_trait;

use crate::error::CreditChatError;
use crate::types::ChatExchange;

/// Appends completed exchanges and serves the bounded recent history.
#[async_trait]
pub trait ConversationLog: Send + Sync {
    /// Persists a completed exchange.
    ///
    /// The orchestrator treats failures here as best-effort: they are
    /// logged and the user still receives the answer.
    async fn append(&self, exchange: &ChatExchange) -> Result<(), CreditChatError>;

    /// Returns up to `limit` most recent exchanges for the user, ordered
    /// ascending by creation time (oldest first), for history replay.
    async fn recent(&self, user_id: &str, limit: i64) -> Result<Vec<ChatExchange>, CreditChatError>;
}
