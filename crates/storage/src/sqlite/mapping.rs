use quiz_core::model::{Purchase, QuizId, QuizResult, UserId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::Row;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn(e: sqlx::Error) -> StorageError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Conflict,
        _ => StorageError::Connection(e.to_string()),
    }
}

pub(crate) fn to_doc<T: Serialize>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(ser)
}

pub(crate) fn from_doc<T: DeserializeOwned>(raw: &str) -> Result<T, StorageError> {
    serde_json::from_str(raw).map_err(ser)
}

pub(crate) fn limit_to_i64(limit: u32) -> i64 {
    i64::from(limit)
}

fn i64_to_u32(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} out of range")))
}

pub(crate) fn map_purchase_row(row: &sqlx::sqlite::SqliteRow) -> Result<Purchase, StorageError> {
    let amount: i64 = row.try_get("amount").map_err(ser)?;
    Ok(Purchase {
        order_id: row.try_get("order_id").map_err(ser)?,
        payment_id: row.try_get("payment_id").map_err(ser)?,
        quiz_id: QuizId::new(row.try_get::<String, _>("quiz_id").map_err(ser)?).map_err(ser)?,
        user_id: UserId::new(row.try_get::<String, _>("user_id").map_err(ser)?).map_err(ser)?,
        amount: u64::try_from(amount).map_err(|_| ser("amount sign overflow"))?,
        purchased_at: row.try_get("purchased_at").map_err(ser)?,
    })
}

pub(crate) fn map_result_row(row: &sqlx::sqlite::SqliteRow) -> Result<QuizResult, StorageError> {
    QuizResult::new(
        QuizId::new(row.try_get::<String, _>("quiz_id").map_err(ser)?).map_err(ser)?,
        UserId::new(row.try_get::<String, _>("user_id").map_err(ser)?).map_err(ser)?,
        row.try_get("started_at").map_err(ser)?,
        row.try_get("completed_at").map_err(ser)?,
        i64_to_u32("total", row.try_get("total").map_err(ser)?)?,
        i64_to_u32("answered", row.try_get("answered").map_err(ser)?)?,
        i64_to_u32("correct", row.try_get("correct").map_err(ser)?)?,
    )
    .map_err(ser)
}
