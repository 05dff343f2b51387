// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat exchange persistence and history retrieval.

use creditchat_core::{ChatExchange, CreditChatError};
use rusqlite::params;

use crate::database::Database;

/// Insert a completed exchange.
pub async fn insert_exchange(db: &Database, exchange: &ChatExchange) -> Result<(), CreditChatError> {
    let exchange = exchange.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO chat_messages (id, user_id, message, response, credits_used, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    exchange.id,
                    exchange.user_id,
                    exchange.message,
                    exchange.response,
                    exchange.credits_used,
                    exchange.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// The most recent `limit` exchanges for a user, returned oldest-first
/// for history replay.
pub async fn recent_exchanges(
    db: &Database,
    user_id: &str,
    limit: i64,
) -> Result<Vec<ChatExchange>, CreditChatError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, message, response, credits_used, created_at
                 FROM chat_messages WHERE user_id = ?1
                 ORDER BY created_at DESC LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![user_id, limit], |row| {
                Ok(ChatExchange {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    message: row.get(2)?,
                    response: row.get(3)?,
                    credits_used: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?;
            let mut exchanges = Vec::new();
            for row in rows {
                exchanges.push(row?);
            }
            // Newest-N selected above; present them in chronological order.
            exchanges.reverse();
            Ok(exchanges)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::profiles::create_profile;
    use creditchat_core::Profile;
    use tempfile::tempdir;

    async fn setup_db_with_user() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exchanges.db");
        let db = Database::open(path.to_str().unwrap(), true).await.unwrap();

        let profile = Profile {
            id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            credits: 10,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
        };
        create_profile(&db, &profile).await.unwrap();
        (db, dir)
    }

    fn make_exchange(id: &str, message: &str, timestamp: &str) -> ChatExchange {
        ChatExchange {
            id: id.to_string(),
            user_id: "u1".to_string(),
            message: message.to_string(),
            response: format!("answer to: {message}"),
            credits_used: 1,
            created_at: timestamp.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_list_in_chronological_order() {
        let (db, _dir) = setup_db_with_user().await;

        insert_exchange(&db, &make_exchange("e1", "first", "2026-01-01T00:00:01.000Z"))
            .await
            .unwrap();
        insert_exchange(&db, &make_exchange("e2", "second", "2026-01-01T00:00:02.000Z"))
            .await
            .unwrap();
        insert_exchange(&db, &make_exchange("e3", "third", "2026-01-01T00:00:03.000Z"))
            .await
            .unwrap();

        let history = recent_exchanges(&db, "u1", 50).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].id, "e1");
        assert_eq!(history[2].id, "e3");
    }

    #[tokio::test]
    async fn limit_keeps_the_newest_rows() {
        let (db, _dir) = setup_db_with_user().await;

        for i in 0..5 {
            insert_exchange(
                &db,
                &make_exchange(
                    &format!("e{i}"),
                    &format!("msg {i}"),
                    &format!("2026-01-01T00:00:0{i}.000Z"),
                ),
            )
            .await
            .unwrap();
        }

        let history = recent_exchanges(&db, "u1", 2).await.unwrap();
        assert_eq!(history.len(), 2);
        // The two newest, oldest-first.
        assert_eq!(history[0].id, "e3");
        assert_eq!(history[1].id, "e4");
    }

    #[tokio::test]
    async fn history_is_scoped_to_the_user() {
        let (db, _dir) = setup_db_with_user().await;
        insert_exchange(&db, &make_exchange("e1", "mine", "2026-01-01T00:00:01.000Z"))
            .await
            .unwrap();

        let other = recent_exchanges(&db, "someone-else", 50).await.unwrap();
        assert!(other.is_empty());
    }
}
