// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the [`CreditLedger`] and [`ConversationLog`] traits.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use creditchat_config::model::StorageConfig;
use creditchat_core::{ChatExchange, ConversationLog, CreditChatError, CreditLedger, Profile};

use crate::database::Database;
use crate::queries;

/// SQLite-backed store for profiles and conversation history.
///
/// Wraps a [`Database`] handle and delegates to the typed query modules.
/// The database is opened by the first call to [`SqliteStore::initialize`].
pub struct SqliteStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStore {
    /// Create a new store with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is called.
    ///
    /// [`initialize`]: SqliteStore::initialize
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Open the database, applying PRAGMAs and migrations.
    pub async fn initialize(&self) -> Result<(), CreditChatError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| CreditChatError::Storage {
            source: "store already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite store initialized");
        Ok(())
    }

    /// Checkpoint and flush before shutdown.
    pub async fn close(&self) -> Result<(), CreditChatError> {
        self.db()?.close().await
    }

    /// Provision a profile row (used by the operator CLI and tests;
    /// signup itself belongs to the external auth provider).
    pub async fn create_profile(&self, profile: &Profile) -> Result<(), CreditChatError> {
        queries::profiles::create_profile(self.db()?, profile).await
    }

    /// Fetch a full profile row.
    pub async fn profile(&self, user_id: &str) -> Result<Option<Profile>, CreditChatError> {
        queries::profiles::get_profile(self.db()?, user_id).await
    }

    fn db(&self) -> Result<&Database, CreditChatError> {
        self.db.get().ok_or_else(|| CreditChatError::Storage {
            source: "store not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl CreditLedger for SqliteStore {
    async fn balance(&self, user_id: &str) -> Result<i64, CreditChatError> {
        queries::profiles::get_credits(self.db()?, user_id).await
    }

    async fn debit(&self, user_id: &str, amount: i64) -> Result<i64, CreditChatError> {
        queries::profiles::debit_credits(self.db()?, user_id, amount).await
    }

    async fn credit(&self, user_id: &str, amount: i64) -> Result<i64, CreditChatError> {
        queries::profiles::credit_credits(self.db()?, user_id, amount).await
    }
}

#[async_trait]
impl ConversationLog for SqliteStore {
    async fn append(&self, exchange: &ChatExchange) -> Result<(), CreditChatError> {
        queries::exchanges::insert_exchange(self.db()?, exchange).await
    }

    async fn recent(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<ChatExchange>, CreditChatError> {
        queries::exchanges::recent_exchanges(self.db()?, user_id, limit).await
    }
}
