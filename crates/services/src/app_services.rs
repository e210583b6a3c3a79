use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::auth::{StaticTokenProvider, TokenProvider};
use crate::checkout::CheckoutService;
use crate::config::ServicesConfig;
use crate::dashboard::DashboardService;
use crate::error::AppServicesError;
use crate::identity::IdentityHub;
use crate::payments::{PaymentsApi, PaymentsClient};
use crate::quiz_flow::QuizFlowService;
use crate::role_gate::RoleGate;

/// Assembles app-facing services over one `Storage`.
#[derive(Clone)]
pub struct AppServices {
    identity: IdentityHub,
    role_gate: Arc<RoleGate>,
    quiz_flow: Arc<QuizFlowService>,
    checkout: Arc<CheckoutService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        config: &ServicesConfig,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, config, clock))
    }

    /// Wires services over `storage`, talking to the payments API from `config`.
    #[must_use]
    pub fn from_storage(storage: &Storage, config: &ServicesConfig, clock: Clock) -> Self {
        let tokens: Arc<dyn TokenProvider> =
            Arc::new(StaticTokenProvider::new(config.auth_token.clone()));
        let payments: Arc<dyn PaymentsApi> =
            Arc::new(PaymentsClient::new(config.payments.clone(), tokens));
        Self::with_payments(storage, payments, config.shuffle_questions, clock)
    }

    /// Wires services with an explicit payments backend.
    #[must_use]
    pub fn with_payments(
        storage: &Storage,
        payments: Arc<dyn PaymentsApi>,
        shuffle_questions: bool,
        clock: Clock,
    ) -> Self {
        let role_gate = Arc::new(RoleGate::new(Arc::clone(&storage.profiles)));
        let quiz_flow = Arc::new(
            QuizFlowService::new(
                clock,
                Arc::clone(&storage.quizzes),
                Arc::clone(&storage.purchases),
                Arc::clone(&storage.results),
            )
            .with_shuffle(shuffle_questions),
        );
        let checkout = Arc::new(CheckoutService::new(
            clock,
            payments,
            Arc::clone(&storage.quizzes),
            Arc::clone(&storage.purchases),
        ));
        let dashboard = Arc::new(DashboardService::new(
            Arc::clone(&storage.profiles),
            Arc::clone(&storage.quizzes),
            Arc::clone(&storage.purchases),
            Arc::clone(&storage.results),
        ));

        Self {
            identity: IdentityHub::default(),
            role_gate,
            quiz_flow,
            checkout,
            dashboard,
        }
    }

    #[must_use]
    pub fn identity(&self) -> IdentityHub {
        self.identity.clone()
    }

    #[must_use]
    pub fn role_gate(&self) -> Arc<RoleGate> {
        Arc::clone(&self.role_gate)
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    #[must_use]
    pub fn checkout(&self) -> Arc<CheckoutService> {
        Arc::clone(&self.checkout)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}
