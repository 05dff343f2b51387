// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Creditchat service.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types used throughout the Creditchat workspace. The storage,
//! generation, auth, and payment crates implement traits defined here; the
//! engine composes them.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CreditChatError;
pub use types::{ChatExchange, CreditPackage, Identity, ProcessorIntent, Profile, CREDIT_PACKAGES};

// Re-export all adapter traits at crate root.
pub use traits::{
    ConversationLog, CreditLedger, GenerationProvider, IdentityVerifier, PaymentProcessor,
};
