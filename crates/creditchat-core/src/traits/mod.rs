// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter traits for the external collaborators of the chat pipeline.
//!
//! Each trait sits at a seam with an external service (auth, storage,
//! generation, payments). The engine takes trait objects, so tests
//! substitute in-memory fakes.

pub mod auth;
pub mod ledger;
pub mod log;
pub mod payment;
pub mod provider;

pub use auth::IdentityVerifier;
pub use ledger::CreditLedger;
pub use log::ConversationLog;
pub use payment::PaymentProcessor;
pub use provider::GenerationProvider;
