// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules. All access goes through the single [`Database`]
//! writer handle.
//!
//! [`Database`]: crate::database::Database

pub mod exchanges;
pub mod profiles;
