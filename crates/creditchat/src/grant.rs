// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `creditchat grant` command implementation.
//!
//! Profiles are normally created by the auth provider's signup trigger;
//! this command covers operator provisioning and local development,
//! where that trigger does not exist.

use creditchat_config::CreditchatConfig;
use creditchat_core::error::CreditChatError;
use creditchat_core::types::now_iso8601;
use creditchat_core::{CreditLedger, Profile};
use creditchat_storage::SqliteStore;

/// Runs the `creditchat grant` command.
pub async fn run_grant(
    config: CreditchatConfig,
    user_id: &str,
    email: Option<&str>,
    credits: i64,
) -> Result<(), CreditChatError> {
    if credits < 1 {
        return Err(CreditChatError::Config(
            "credits must be a positive integer".into(),
        ));
    }

    let store = SqliteStore::new(config.storage.clone());
    store.initialize().await?;

    match store.profile(user_id).await? {
        Some(_) => {
            let balance = store.credit(user_id, credits).await?;
            println!("granted {credits} credits to {user_id} (balance: {balance})");
        }
        None => {
            let email = email.ok_or_else(|| {
                CreditChatError::Config(format!(
                    "profile {user_id} does not exist; pass --email to create it"
                ))
            })?;
            let now = now_iso8601();
            store
                .create_profile(&Profile {
                    id: user_id.to_string(),
                    email: email.to_string(),
                    credits,
                    created_at: now.clone(),
                    updated_at: now,
                })
                .await?;
            println!("created profile {user_id} with {credits} credits");
        }
    }

    store.close().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditchat_config::CreditchatConfig;
    use tempfile::tempdir;

    fn config_with_db(path: &str) -> CreditchatConfig {
        let mut config = CreditchatConfig::default();
        config.storage.database_path = path.to_string();
        config
    }

    #[tokio::test]
    async fn grant_creates_profile_when_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grant.db");
        let config = config_with_db(path.to_str().unwrap());

        run_grant(config.clone(), "u1", Some("u1@example.com"), 10)
            .await
            .unwrap();

        let store = SqliteStore::new(config.storage.clone());
        store.initialize().await.unwrap();
        let profile = store.profile("u1").await.unwrap().unwrap();
        assert_eq!(profile.credits, 10);
        assert_eq!(profile.email, "u1@example.com");
    }

    #[tokio::test]
    async fn grant_tops_up_existing_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("topup.db");
        let config = config_with_db(path.to_str().unwrap());

        run_grant(config.clone(), "u1", Some("u1@example.com"), 10)
            .await
            .unwrap();
        run_grant(config.clone(), "u1", None, 5).await.unwrap();

        let store = SqliteStore::new(config.storage.clone());
        store.initialize().await.unwrap();
        let profile = store.profile("u1").await.unwrap().unwrap();
        assert_eq!(profile.credits, 15);
    }

    #[tokio::test]
    async fn grant_requires_email_for_new_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noemail.db");
        let config = config_with_db(path.to_str().unwrap());

        let err = run_grant(config, "u1", None, 10).await.unwrap_err();
        assert!(matches!(err, CreditChatError::Config(_)));
    }

    #[tokio::test]
    async fn grant_rejects_non_positive_credits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.db");
        let config = config_with_db(path.to_str().unwrap());

        let err = run_grant(config, "u1", Some("u1@example.com"), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, CreditChatError::Config(_)));
    }
}
