// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini generateContent client for creditchat.
//!
//! Implements the `GenerationProvider` trait from `creditchat-core` over
//! Google's Gemini API, carrying the fixed Python/ML assistant
//! instruction with every request.

pub mod client;
pub mod types;

pub use client::GeminiClient;
