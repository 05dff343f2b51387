// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stripe payment-intent client for creditchat.
//!
//! Implements the `PaymentProcessor` trait from `creditchat-core` over
//! Stripe's form-encoded payment-intents endpoint.

pub mod client;
pub mod types;

pub use client::StripeClient;
