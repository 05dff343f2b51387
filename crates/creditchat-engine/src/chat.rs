// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat pipeline orchestration.
//!
//! The pipeline charges only for answers it actually produced: the
//! balance is read up front, the paid generation call runs, and the
//! debit lands afterwards. The two best-effort tail steps (debit and
//! history append) are logged on failure but never withhold the answer.

use std::sync::Arc;

use creditchat_core::{
    ChatExchange, ConversationLog, CreditLedger, GenerationProvider, Identity, IdentityVerifier,
};
use tracing::{debug, warn};

use crate::error::ChatError;
use crate::topic::TopicFilter;

/// A successful chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// The generated assistant response.
    pub response: String,
    /// Balance after this turn, computed from the balance read at the
    /// start of the request minus the per-message cost.
    pub remaining_credits: i64,
}

/// Orchestrates one chat turn across auth, ledger, topic gate,
/// generation, and history.
pub struct ChatEngine {
    verifier: Arc<dyn IdentityVerifier>,
    ledger: Arc<dyn CreditLedger>,
    log: Arc<dyn ConversationLog>,
    provider: Arc<dyn GenerationProvider>,
    filter: TopicFilter,
    cost_per_message: i64,
    history_limit: i64,
}

impl ChatEngine {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        ledger: Arc<dyn CreditLedger>,
        log: Arc<dyn ConversationLog>,
        provider: Arc<dyn GenerationProvider>,
        cost_per_message: i64,
        history_limit: i64,
    ) -> Self {
        Self {
            verifier,
            ledger,
            log,
            provider,
            filter: TopicFilter::new(),
            cost_per_message,
            history_limit,
        }
    }

    /// Runs one chat turn for the bearer of `token`.
    ///
    /// Step order matters and is observable: the balance is checked
    /// before the topic gate, so a broke user sees the credit error even
    /// for an off-topic message.
    pub async fn handle(&self, token: &str, message: &str) -> Result<ChatReply, ChatError> {
        let identity = self.verifier.verify(token).await?;

        if message.trim().is_empty() {
            return Err(ChatError::InvalidInput("Message is required".into()));
        }

        let balance = self.ledger.balance(&identity.id).await?;
        if balance <= 0 {
            return Err(ChatError::InsufficientCredits);
        }

        if !self.filter.is_in_scope(message) {
            return Err(ChatError::OutOfScope);
        }

        let response = self.provider.generate(message).await?;
        debug!(user_id = %identity.id, balance, "generated chat response");

        if let Err(e) = self.ledger.debit(&identity.id, self.cost_per_message).await {
            warn!(user_id = %identity.id, error = %e, "failed to debit credits");
        }

        let exchange = ChatExchange::completed(&identity.id, message, &response);
        if let Err(e) = self.log.append(&exchange).await {
            warn!(user_id = %identity.id, error = %e, "failed to persist exchange");
        }

        Ok(ChatReply {
            response,
            remaining_credits: balance - self.cost_per_message,
        })
    }

    /// Returns the bearer's recent history, oldest first.
    pub async fn history(&self, token: &str) -> Result<Vec<ChatExchange>, ChatError> {
        let identity = self.verifier.verify(token).await?;
        let messages = self.log.recent(&identity.id, self.history_limit).await?;
        Ok(messages)
    }

    /// Resolves the bearer token without running the pipeline. Used by
    /// the payment endpoints, which share the same auth scheme.
    pub async fn authenticate(&self, token: &str) -> Result<Identity, ChatError> {
        Ok(self.verifier.verify(token).await?)
    }
}
