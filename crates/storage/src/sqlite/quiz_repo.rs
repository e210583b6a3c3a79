use async_trait::async_trait;
use quiz_core::model::{Quiz, QuizDraft, QuizId};
use sqlx::Row;

use crate::repository::{QuizRepository, StorageError};

use super::SqliteRepository;
use super::mapping::{conn, from_doc, limit_to_i64, ser, to_doc};

fn quiz_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Quiz, StorageError> {
    let doc: String = row.try_get("doc").map_err(ser)?;
    let draft: QuizDraft = from_doc(&doc)?;
    draft.validate().map_err(ser)
}

#[async_trait]
impl QuizRepository for SqliteRepository {
    async fn get_quiz(&self, id: &QuizId) -> Result<Option<Quiz>, StorageError> {
        let row = sqlx::query("SELECT doc FROM quizzes WHERE id = ?1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;
        row.as_ref().map(quiz_from_row).transpose()
    }

    async fn list_quizzes(&self, limit: u32) -> Result<Vec<Quiz>, StorageError> {
        let rows = sqlx::query("SELECT doc FROM quizzes ORDER BY seq LIMIT ?1")
            .bind(limit_to_i64(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(conn)?;
        rows.iter().map(quiz_from_row).collect()
    }

    async fn upsert_quiz(&self, quiz: &Quiz) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO quizzes (id, doc)
            VALUES (?1, ?2)
            ON CONFLICT(id) DO UPDATE SET doc = excluded.doc
            ",
        )
        .bind(quiz.id().as_str())
        .bind(to_doc(&quiz.to_draft())?)
        .execute(&self.pool)
        .await
        .map_err(conn)?;
        Ok(())
    }
}
