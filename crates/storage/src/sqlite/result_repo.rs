use async_trait::async_trait;
use quiz_core::model::{QuizResult, UserId};

use crate::repository::{QuizResultRepository, StorageError};

use super::SqliteRepository;
use super::mapping::{conn, limit_to_i64, map_result_row};

#[async_trait]
impl QuizResultRepository for SqliteRepository {
    async fn append_result(&self, result: &QuizResult) -> Result<i64, StorageError> {
        let outcome = sqlx::query(
            r"
            INSERT INTO quiz_results (
                quiz_id, user_id, started_at, completed_at, total, answered, correct
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(result.quiz_id().as_str())
        .bind(result.user_id().as_str())
        .bind(result.started_at())
        .bind(result.completed_at())
        .bind(i64::from(result.total()))
        .bind(i64::from(result.answered()))
        .bind(i64::from(result.correct()))
        .execute(&self.pool)
        .await
        .map_err(conn)?;
        Ok(outcome.last_insert_rowid())
    }

    async fn list_results(&self, user_id: &UserId, limit: u32) -> Result<Vec<QuizResult>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT quiz_id, user_id, started_at, completed_at, total, answered, correct
            FROM quiz_results
            WHERE user_id = ?1
            ORDER BY completed_at DESC, id DESC
            LIMIT ?2
            ",
        )
        .bind(user_id.as_str())
        .bind(limit_to_i64(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;
        rows.iter().map(map_result_row).collect()
    }
}
