#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth;
pub mod checkout;
pub mod config;
pub mod countdown;
pub mod dashboard;
pub mod error;
pub mod identity;
pub mod payments;
pub mod quiz_flow;
pub mod role_gate;
pub mod tab_router;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use auth::{StaticTokenProvider, TokenProvider};
pub use checkout::{CheckoutOrder, CheckoutService};
pub use config::{PaymentsConfig, ServicesConfig};
pub use countdown::{TICK_PERIOD, drive_ticks};
pub use dashboard::{DashboardService, OptedQuizItem};
pub use error::{
    AppServicesError, AuthError, CheckoutError, ConfigError, DashboardError, PaymentError,
    QuizFlowError,
};
pub use identity::IdentityHub;
pub use payments::{PaymentsApi, PaymentsClient};
pub use quiz_flow::{QuizFlowService, QuizSubmission};
pub use role_gate::{ResolutionTicket, RoleGate, RoleResolution};
pub use tab_router::TabRouter;
