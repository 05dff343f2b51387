// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request-level error taxonomy for the chat and payment flows.

use thiserror::Error;

/// Outcome classification for a chat or payment request.
///
/// The gateway maps each variant to an HTTP status and user-facing
/// message; only `InsufficientCredits` and `OutOfScope` get dedicated
/// statuses, everything else collapses to 500.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Missing, malformed, or rejected bearer token.
    #[error("invalid token")]
    Unauthorized,

    /// Empty message, non-positive credit quantity, or similar bad input.
    #[error("{0}")]
    InvalidInput(String),

    /// The user's credit balance is zero or below.
    #[error("no credits left")]
    InsufficientCredits,

    /// The message did not match the Python/ML topic filter.
    #[error("message out of scope")]
    OutOfScope,

    /// The generation provider failed.
    #[error("failed to generate response: {0}")]
    Generation(String),

    /// Storage, payment, or other unexpected failure.
    #[error("{0}")]
    Internal(String),
}

impl From<creditchat_core::CreditChatError> for ChatError {
    fn from(err: creditchat_core::CreditChatError) -> Self {
        use creditchat_core::CreditChatError;
        match err {
            CreditChatError::Auth { message, .. } => {
                tracing::debug!(%message, "auth rejection");
                ChatError::Unauthorized
            }
            CreditChatError::Provider { message, .. } => ChatError::Generation(message),
            CreditChatError::ProfileNotFound { user_id } => {
                ChatError::Internal(format!("profile not found for user {user_id}"))
            }
            other => ChatError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditchat_core::CreditChatError;

    #[test]
    fn auth_errors_become_unauthorized() {
        let err: ChatError = CreditChatError::Auth {
            message: "token expired".into(),
            source: None,
        }
        .into();
        assert!(matches!(err, ChatError::Unauthorized));
    }

    #[test]
    fn provider_errors_become_generation() {
        let err: ChatError = CreditChatError::Provider {
            message: "boom".into(),
            source: None,
        }
        .into();
        assert!(matches!(err, ChatError::Generation(_)));
    }

    #[test]
    fn storage_errors_become_internal() {
        let err: ChatError = CreditChatError::Internal("db gone".into()).into();
        assert!(matches!(err, ChatError::Internal(_)));
    }
}
