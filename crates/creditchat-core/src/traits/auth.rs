// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity verification trait for the external auth provider.

use async_trait::async_trait;

use crate::error::CreditChatError;
use crate::types::Identity;

/// Resolves a bearer token to a verified user identity.
///
/// Session issuance is delegated entirely to the external auth provider;
/// this trait only covers the verification the chat pipeline needs.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verifies the given bearer token and returns the identity it belongs to.
    ///
    /// Fails with [`CreditChatError::Auth`] for absent, expired, or
    /// otherwise invalid tokens.
    async fn verify(&self, token: &str) -> Result<Identity, CreditChatError>;
}
