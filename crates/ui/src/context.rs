use std::sync::Arc;

use services::{CheckoutService, DashboardService, IdentityHub, QuizFlowService, RoleGate};

pub trait UiApp: Send + Sync {
    fn identity(&self) -> IdentityHub;

    fn role_gate(&self) -> Arc<RoleGate>;
    fn quiz_flow(&self) -> Arc<QuizFlowService>;
    fn checkout(&self) -> Arc<CheckoutService>;
    fn dashboard(&self) -> Arc<DashboardService>;
}

#[derive(Clone)]
pub struct AppContext {
    identity: IdentityHub,
    role_gate: Arc<RoleGate>,
    quiz_flow: Arc<QuizFlowService>,
    checkout: Arc<CheckoutService>,
    dashboard: Arc<DashboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            identity: app.identity(),
            role_gate: app.role_gate(),
            quiz_flow: app.quiz_flow(),
            checkout: app.checkout(),
            dashboard: app.dashboard(),
        }
    }

    /// Subscription point for the signed-in identity.
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
