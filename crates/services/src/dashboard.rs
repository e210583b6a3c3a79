use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use quiz_core::model::{Identity, Purchase, Quiz, QuizId, QuizResult, UserId, UserProfile};
use storage::repository::{
    ProfileRepository, PurchaseRepository, QuizRepository, QuizResultRepository,
};

use crate::error::DashboardError;

const QUIZ_LOOKUP_LIMIT: u32 = 500;

/// A purchased quiz as shown on the "My Quizzes" tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptedQuizItem {
    pub quiz_id: QuizId,
    pub title: String,
    pub amount: u64,
    pub purchased_at: DateTime<Utc>,
}

/// Read models behind the dashboard tabs, plus profile registration.
#[derive(Clone)]
pub struct DashboardService {
    profiles: Arc<dyn ProfileRepository>,
    quizzes: Arc<dyn QuizRepository>,
    purchases: Arc<dyn PurchaseRepository>,
    results: Arc<dyn QuizResultRepository>,
}

impl DashboardService {
    #[must_use]
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        quizzes: Arc<dyn QuizRepository>,
        purchases: Arc<dyn PurchaseRepository>,
        results: Arc<dyn QuizResultRepository>,
    ) -> Self {
        Self {
            profiles,
            quizzes,
            purchases,
            results,
        }
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Storage` on read failures.
    pub async fn profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, DashboardError> {
        Ok(self.profiles.get_profile(user_id).await?)
    }

    /// Creates the profile document for a new sign-up. An existing profile
    /// (and its role) is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Storage` if the profile cannot be read or stored.
    pub async fn register(
        &self,
        identity: &Identity,
        display_name: &str,
    ) -> Result<UserProfile, DashboardError> {
        if let Some(existing) = self.profiles.get_profile(identity.user_id()).await? {
            return Ok(existing);
        }
        let mut profile = UserProfile::new(identity.user_id().clone(), display_name.trim());
        profile.email = identity.email().map(str::to_string);
        self.profiles.upsert_profile(&profile).await?;
        tracing::info!(user_id = %identity.user_id(), "profile created");
        Ok(profile)
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Storage` on read failures.
    pub async fn users(&self, limit: u32) -> Result<Vec<UserProfile>, DashboardError> {
        Ok(self.profiles.list_profiles(limit).await?)
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Storage` on read failures.
    pub async fn transactions(&self, limit: u32) -> Result<Vec<Purchase>, DashboardError> {
        Ok(self.purchases.list_purchases(limit).await?)
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Storage` on read failures.
    pub async fn quizzes(&self, limit: u32) -> Result<Vec<Quiz>, DashboardError> {
        Ok(self.quizzes.list_quizzes(limit).await?)
    }

    /// Purchases of `user_id` joined with quiz titles, newest first. A quiz
    /// that no longer exists keeps its id as title.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Storage` on read failures.
    pub async fn opted_quizzes(&self, user_id: &UserId) -> Result<Vec<OptedQuizItem>, DashboardError> {
        let purchases = self.purchases.list_purchases_for_user(user_id).await?;
        if purchases.is_empty() {
            return Ok(Vec::new());
        }
        let titles: HashMap<QuizId, String> = self
            .quizzes
            .list_quizzes(QUIZ_LOOKUP_LIMIT)
            .await?
            .into_iter()
            .map(|quiz| (quiz.id().clone(), quiz.title().to_string()))
            .collect();

        Ok(purchases
            .into_iter()
            .map(|purchase| OptedQuizItem {
                title: titles
                    .get(&purchase.quiz_id)
                    .cloned()
                    .unwrap_or_else(|| purchase.quiz_id.to_string()),
                quiz_id: purchase.quiz_id,
                amount: purchase.amount,
                purchased_at: purchase.purchased_at,
            })
            .collect())
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Storage` on read failures.
    pub async fn results(&self, user_id: &UserId, limit: u32) -> Result<Vec<QuizResult>, DashboardError> {
        Ok(self.results.list_results(user_id, limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::model::{Question, QuestionId, QuizDraft};
    use quiz_core::time::fixed_now;
    use storage::repository::InMemoryRepository;

    fn service(repo: &InMemoryRepository) -> DashboardService {
        DashboardService::new(
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
        )
    }

    fn purchase(order: &str, quiz: &str, minutes: i64) -> Purchase {
        Purchase {
            order_id: order.into(),
            payment_id: format!("pay_{order}"),
            quiz_id: QuizId::new(quiz).unwrap(),
            user_id: UserId::new("u1").unwrap(),
            amount: 100,
            purchased_at: fixed_now() + Duration::minutes(minutes),
        }
    }

    #[tokio::test]
    async fn register_never_overwrites_existing_role() {
        let repo = InMemoryRepository::new();
        let dashboard = service(&repo);
        let identity = Identity::new(UserId::new("u1").unwrap(), Some("a@b.c".into()));

        let created = dashboard.register(&identity, " Ada ").await.unwrap();
        assert_eq!(created.display_name, "Ada");
        assert_eq!(created.email.as_deref(), Some("a@b.c"));
        assert_eq!(created.role, None);

        repo.upsert_profile(&created.clone().with_role("admin")).await.unwrap();
        let again = dashboard.register(&identity, "Other").await.unwrap();
        assert_eq!(again.role.as_deref(), Some("admin"));
        assert_eq!(again.display_name, "Ada");
    }

    #[tokio::test]
    async fn opted_quizzes_join_titles_newest_first() {
        let repo = InMemoryRepository::new();
        let quiz = QuizDraft {
            id: QuizId::new("rust-101").unwrap(),
            title: "Rust 101".into(),
            description: None,
            price: 100,
            duration_secs: 60,
            questions: vec![Question::new(
                QuestionId::new("q1").unwrap(),
                "Q",
                vec!["A".into()],
                "A",
            )],
        }
        .validate()
        .unwrap();
        repo.upsert_quiz(&quiz).await.unwrap();
        repo.record_purchase(&purchase("o1", "rust-101", 0)).await.unwrap();
        repo.record_purchase(&purchase("o2", "retired", 5)).await.unwrap();

        let items = service(&repo)
            .opted_quizzes(&UserId::new("u1").unwrap())
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "retired");
        assert_eq!(items[1].title, "Rust 101");
    }

    #[tokio::test]
    async fn no_purchases_means_empty_list() {
        let repo = InMemoryRepository::new();
        let items = service(&repo)
            .opted_quizzes(&UserId::new("u1").unwrap())
            .await
            .unwrap();
        assert!(items.is_empty());
    }
}
