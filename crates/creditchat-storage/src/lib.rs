// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for creditchat: profiles with credit balances and
//! the per-user conversation log.
//!
//! The crate exposes [`SqliteStore`], which implements the
//! `CreditLedger` and `ConversationLog` traits from `creditchat-core`,
//! backed by a single-writer [`Database`] handle with embedded refinery
//! migrations.

pub mod database;
pub mod migrations;
pub mod queries;
pub mod store;

pub use database::Database;
pub use store::SqliteStore;
