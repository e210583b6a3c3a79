use async_trait::async_trait;
use quiz_core::model::{Purchase, QuizId, UserId};

use crate::repository::{PurchaseRepository, StorageError};

use super::SqliteRepository;
use super::mapping::{conn, limit_to_i64, map_purchase_row, ser};

#[async_trait]
impl PurchaseRepository for SqliteRepository {
    async fn record_purchase(&self, purchase: &Purchase) -> Result<(), StorageError> {
        let amount = i64::try_from(purchase.amount).map_err(|_| ser("amount overflow"))?;
        sqlx::query(
            r"
            INSERT INTO purchases (order_id, payment_id, quiz_id, user_id, amount, purchased_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(&purchase.order_id)
        .bind(&purchase.payment_id)
        .bind(purchase.quiz_id.as_str())
        .bind(purchase.user_id.as_str())
        .bind(amount)
        .bind(purchase.purchased_at)
        .execute(&self.pool)
        .await
        .map_err(conn)?;
        Ok(())
    }

    async fn list_purchases_for_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT order_id, payment_id, quiz_id, user_id, amount, purchased_at
            FROM purchases
            WHERE user_id = ?1
            ORDER BY purchased_at DESC
            ",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;
        rows.iter().map(map_purchase_row).collect()
    }

    async fn list_purchases(&self, limit: u32) -> Result<Vec<Purchase>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT order_id, payment_id, quiz_id, user_id, amount, purchased_at
            FROM purchases
            ORDER BY purchased_at DESC
            LIMIT ?1
            ",
        )
        .bind(limit_to_i64(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;
        rows.iter().map(map_purchase_row).collect()
    }

    async fn has_purchase(&self, user_id: &UserId, quiz_id: &QuizId) -> Result<bool, StorageError> {
        let row = sqlx::query("SELECT 1 FROM purchases WHERE user_id = ?1 AND quiz_id = ?2 LIMIT 1")
            .bind(user_id.as_str())
            .bind(quiz_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;
        Ok(row.is_some())
    }
}
