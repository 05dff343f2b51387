// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Profile and credit-balance operations.
//!
//! The balance mutations are single conditional UPDATE statements so the
//! non-negative invariant holds at the store even when concurrent requests
//! race between the balance check and the debit.

use creditchat_core::types::now_iso8601;
use creditchat_core::{CreditChatError, Profile};
use rusqlite::params;

use crate::database::Database;

/// Insert a new profile row.
pub async fn create_profile(db: &Database, profile: &Profile) -> Result<(), CreditChatError> {
    let profile = profile.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO profiles (id, email, credits, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    profile.id,
                    profile.email,
                    profile.credits,
                    profile.created_at,
                    profile.updated_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a profile by user id.
pub async fn get_profile(db: &Database, user_id: &str) -> Result<Option<Profile>, CreditChatError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, email, credits, created_at, updated_at
                 FROM profiles WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![user_id], |row| {
                Ok(Profile {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    credits: row.get(2)?,
                    created_at: row.get(3)?,
                    updated_at: row.get(4)?,
                })
            });
            match result {
                Ok(profile) => Ok(Some(profile)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Read the current credit balance.
///
/// Fails with [`CreditChatError::ProfileNotFound`] when no row exists.
pub async fn get_credits(db: &Database, user_id: &str) -> Result<i64, CreditChatError> {
    match get_profile(db, user_id).await? {
        Some(profile) => Ok(profile.credits),
        None => Err(CreditChatError::ProfileNotFound {
            user_id: user_id.to_string(),
        }),
    }
}

/// Subtract `amount` credits, flooring the balance at zero, and return
/// the new balance.
pub async fn debit_credits(
    db: &Database,
    user_id: &str,
    amount: i64,
) -> Result<i64, CreditChatError> {
    let user_id_owned = user_id.to_string();
    let updated = db
        .connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE profiles
                 SET credits = MAX(credits - ?2, 0), updated_at = ?3
                 WHERE id = ?1",
                params![user_id_owned, amount, now_iso8601()],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let balance: i64 = conn.query_row(
                "SELECT credits FROM profiles WHERE id = ?1",
                params![user_id_owned],
                |row| row.get(0),
            )?;
            Ok(Some(balance))
        })
        .await
        .map_err(crate::database::map_tr_err)?;

    updated.ok_or_else(|| CreditChatError::ProfileNotFound {
        user_id: user_id.to_string(),
    })
}

/// Add `amount` credits and return the new balance.
pub async fn credit_credits(
    db: &Database,
    user_id: &str,
    amount: i64,
) -> Result<i64, CreditChatError> {
    let user_id_owned = user_id.to_string();
    let updated = db
        .connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE profiles
                 SET credits = credits + ?2, updated_at = ?3
                 WHERE id = ?1",
                params![user_id_owned, amount, now_iso8601()],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let balance: i64 = conn.query_row(
                "SELECT credits FROM profiles WHERE id = ?1",
                params![user_id_owned],
                |row| row.get(0),
            )?;
            Ok(Some(balance))
        })
        .await
        .map_err(crate::database::map_tr_err)?;

    updated.ok_or_else(|| CreditChatError::ProfileNotFound {
        user_id: user_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.db");
        let db = Database::open(path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    fn make_profile(id: &str, credits: i64) -> Profile {
        Profile {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            credits,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_get_profile() {
        let (db, _dir) = setup_db().await;
        create_profile(&db, &make_profile("u1", 3)).await.unwrap();

        let profile = get_profile(&db, "u1").await.unwrap().unwrap();
        assert_eq!(profile.email, "u1@example.com");
        assert_eq!(profile.credits, 3);
    }

    #[tokio::test]
    async fn get_credits_fails_for_missing_profile() {
        let (db, _dir) = setup_db().await;
        let err = get_credits(&db, "nobody").await.unwrap_err();
        assert!(matches!(err, CreditChatError::ProfileNotFound { .. }));
    }

    #[tokio::test]
    async fn debit_reduces_balance_and_returns_new_value() {
        let (db, _dir) = setup_db().await;
        create_profile(&db, &make_profile("u1", 3)).await.unwrap();

        let balance = debit_credits(&db, "u1", 1).await.unwrap();
        assert_eq!(balance, 2);
        assert_eq!(get_credits(&db, "u1").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn debit_floors_at_zero() {
        let (db, _dir) = setup_db().await;
        create_profile(&db, &make_profile("u1", 1)).await.unwrap();

        // Two debits racing past a single-credit balance must not drive
        // the stored value negative.
        let first = debit_credits(&db, "u1", 1).await.unwrap();
        let second = debit_credits(&db, "u1", 1).await.unwrap();
        assert_eq!(first, 0);
        assert_eq!(second, 0);
    }

    #[tokio::test]
    async fn debit_missing_profile_fails() {
        let (db, _dir) = setup_db().await;
        let err = debit_credits(&db, "ghost", 1).await.unwrap_err();
        assert!(matches!(err, CreditChatError::ProfileNotFound { .. }));
    }

    #[tokio::test]
    async fn credit_increases_balance() {
        let (db, _dir) = setup_db().await;
        create_profile(&db, &make_profile("u1", 0)).await.unwrap();

        let balance = credit_credits(&db, "u1", 50).await.unwrap();
        assert_eq!(balance, 50);

        // Repeated confirmations each add independently (no idempotency
        // guard at this layer).
        let balance = credit_credits(&db, "u1", 50).await.unwrap();
        assert_eq!(balance, 100);
    }

    #[tokio::test]
    async fn debit_touches_updated_at() {
        let (db, _dir) = setup_db().await;
        create_profile(&db, &make_profile("u1", 2)).await.unwrap();
        debit_credits(&db, "u1", 1).await.unwrap();

        let profile = get_profile(&db, "u1").await.unwrap().unwrap();
        assert_ne!(profile.updated_at, "2026-01-01T00:00:00.000Z");
    }
}
