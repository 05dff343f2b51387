// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat orchestration for creditchat.
//!
//! Hosts the per-request pipeline (auth, credit check, topic gate,
//! generation, best-effort accounting) and the purchase flows, all
//! behind the adapter traits from `creditchat-core` so the gateway and
//! tests can swap implementations.

pub mod chat;
pub mod error;
pub mod payments;
pub mod topic;

pub use chat::{ChatEngine, ChatReply};
pub use error::ChatError;
pub use payments::{ConfirmReply, IntentReply, PaymentIssuer};
pub use topic::TopicFilter;
