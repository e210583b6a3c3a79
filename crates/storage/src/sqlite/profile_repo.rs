use async_trait::async_trait;
use quiz_core::model::{UserId, UserProfile};
use sqlx::Row;

use crate::repository::{ProfileRepository, StorageError};

use super::SqliteRepository;
use super::mapping::{conn, from_doc, limit_to_i64, ser, to_doc};

#[async_trait]
impl ProfileRepository for SqliteRepository {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, StorageError> {
        let row = sqlx::query("SELECT doc FROM profiles WHERE user_id = ?1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let doc: String = row.try_get("doc").map_err(ser)?;
        from_doc(&doc).map(Some)
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO profiles (user_id, doc)
            VALUES (?1, ?2)
            ON CONFLICT(user_id) DO UPDATE SET doc = excluded.doc
            ",
        )
        .bind(profile.user_id.as_str())
        .bind(to_doc(profile)?)
        .execute(&self.pool)
        .await
        .map_err(conn)?;
        Ok(())
    }

    async fn list_profiles(&self, limit: u32) -> Result<Vec<UserProfile>, StorageError> {
        let rows = sqlx::query("SELECT doc FROM profiles ORDER BY user_id LIMIT ?1")
            .bind(limit_to_i64(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(conn)?;

        rows.iter()
            .map(|row| {
                let doc: String = row.try_get("doc").map_err(ser)?;
                from_doc(&doc)
            })
            .collect()
    }
}
