use async_trait::async_trait;
use quiz_core::model::{Purchase, Quiz, QuizId, QuizResult, UserId, UserProfile};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("permission denied")]
    PermissionDenied,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Profile documents, keyed by auth identity.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the profile document for `user_id`, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the read itself fails.
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the profile cannot be stored.
    async fn upsert_profile(&self, profile: &UserProfile) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on read failures.
    async fn list_profiles(&self, limit: u32) -> Result<Vec<UserProfile>, StorageError>;
}

/// Quiz documents published by the content source.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` on read failures or when the stored document is invalid.
    async fn get_quiz(&self, id: &QuizId) -> Result<Option<Quiz>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on read failures or when a stored document is invalid.
    async fn list_quizzes(&self, limit: u32) -> Result<Vec<Quiz>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the quiz cannot be stored.
    async fn upsert_quiz(&self, quiz: &Quiz) -> Result<(), StorageError>;
}

/// Verified payments.
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Store a verified purchase. Recording the same order twice is a conflict.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` for a duplicate order id.
    async fn record_purchase(&self, purchase: &Purchase) -> Result<(), StorageError>;

    /// Purchases of `user_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read failures.
    async fn list_purchases_for_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, StorageError>;

    /// All purchases, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read failures.
    async fn list_purchases(&self, limit: u32) -> Result<Vec<Purchase>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on read failures.
    async fn has_purchase(&self, user_id: &UserId, quiz_id: &QuizId) -> Result<bool, StorageError>;
}

/// Finished quiz attempts.
#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the result cannot be stored.
    async fn append_result(&self, result: &QuizResult) -> Result<i64, StorageError>;

    /// Results of `user_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read failures.
    async fn list_results(&self, user_id: &UserId, limit: u32) -> Result<Vec<QuizResult>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    profiles: Arc<Mutex<HashMap<UserId, UserProfile>>>,
    quizzes: Arc<Mutex<Vec<Quiz>>>,
    purchases: Arc<Mutex<Vec<Purchase>>>,
    results: Arc<Mutex<Vec<QuizResult>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn take_limit<T>(items: impl Iterator<Item = T>, limit: u32) -> Vec<T> {
    items
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .collect()
}

#[async_trait]
impl ProfileRepository for InMemoryRepository {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, StorageError> {
        let guard = self.profiles.lock().map_err(poisoned)?;
        Ok(guard.get(user_id).cloned())
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let mut guard = self.profiles.lock().map_err(poisoned)?;
        guard.insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }

    async fn list_profiles(&self, limit: u32) -> Result<Vec<UserProfile>, StorageError> {
        let guard = self.profiles.lock().map_err(poisoned)?;
        let mut profiles: Vec<_> = guard.values().cloned().collect();
        profiles.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(take_limit(profiles.into_iter(), limit))
    }
}

#[async_trait]
impl QuizRepository for InMemoryRepository {
    async fn get_quiz(&self, id: &QuizId) -> Result<Option<Quiz>, StorageError> {
        let guard = self.quizzes.lock().map_err(poisoned)?;
        Ok(guard.iter().find(|quiz| quiz.id() == id).cloned())
    }

    async fn list_quizzes(&self, limit: u32) -> Result<Vec<Quiz>, StorageError> {
        let guard = self.quizzes.lock().map_err(poisoned)?;
        Ok(take_limit(guard.iter().cloned(), limit))
    }

    async fn upsert_quiz(&self, quiz: &Quiz) -> Result<(), StorageError> {
        let mut guard = self.quizzes.lock().map_err(poisoned)?;
        match guard.iter_mut().find(|existing| existing.id() == quiz.id()) {
            Some(existing) => *existing = quiz.clone(),
            None => guard.push(quiz.clone()),
        }
        Ok(())
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryRepository {
    async fn record_purchase(&self, purchase: &Purchase) -> Result<(), StorageError> {
        let mut guard = self.purchases.lock().map_err(poisoned)?;
        if guard.iter().any(|p| p.order_id == purchase.order_id) {
            return Err(StorageError::Conflict);
        }
        guard.push(purchase.clone());
        Ok(())
    }

    async fn list_purchases_for_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, StorageError> {
        let guard = self.purchases.lock().map_err(poisoned)?;
        let mut found: Vec<_> = guard
            .iter()
            .filter(|p| &p.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.purchased_at.cmp(&a.purchased_at));
        Ok(found)
    }

    async fn list_purchases(&self, limit: u32) -> Result<Vec<Purchase>, StorageError> {
        let guard = self.purchases.lock().map_err(poisoned)?;
        let mut all = guard.clone();
        all.sort_by(|a, b| b.purchased_at.cmp(&a.purchased_at));
        Ok(take_limit(all.into_iter(), limit))
    }

    async fn has_purchase(&self, user_id: &UserId, quiz_id: &QuizId) -> Result<bool, StorageError> {
        let guard = self.purchases.lock().map_err(poisoned)?;
        Ok(guard
            .iter()
            .any(|p| &p.user_id == user_id && &p.quiz_id == quiz_id))
    }
}

#[async_trait]
impl QuizResultRepository for InMemoryRepository {
    async fn append_result(&self, result: &QuizResult) -> Result<i64, StorageError> {
        let mut guard = self.results.lock().map_err(poisoned)?;
        guard.push(result.clone());
        i64::try_from(guard.len()).map_err(|_| StorageError::Conflict)
    }

    async fn list_results(&self, user_id: &UserId, limit: u32) -> Result<Vec<QuizResult>, StorageError> {
        let guard = self.results.lock().map_err(poisoned)?;
        let mut found: Vec<_> = guard
            .iter()
            .filter(|r| r.user_id() == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.completed_at().cmp(&a.completed_at()));
        Ok(take_limit(found.into_iter(), limit))
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub profiles: Arc<dyn ProfileRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
    pub purchases: Arc<dyn PurchaseRepository>,
    pub results: Arc<dyn QuizResultRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        Self {
            profiles: Arc::new(repo.clone()),
            quizzes: Arc::new(repo.clone()),
            purchases: Arc::new(repo.clone()),
            results: Arc::new(repo),
        }
    }
}
