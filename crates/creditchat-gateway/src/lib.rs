// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for creditchat.
//!
//! Exposes the chat pipeline and payment flows over a small JSON API
//! with permissive CORS for the browser front end, plus the bearer-token
//! verifier backed by the external auth provider.

pub mod auth;
pub mod handlers;
pub mod server;

pub use auth::HttpIdentityVerifier;
pub use server::{GatewayState, router, start_server};
