mod checkout;
mod dashboard;
mod home;
mod identity;
mod quiz;
mod signup;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use checkout::CheckoutView;
pub use dashboard::DashboardView;
pub use home::HomeView;
pub use identity::use_identity;
pub use quiz::{NavigationPanel, QuestionCard, QuizTimer, QuizView};
pub use signup::SignUpView;
pub use state::{ViewError, ViewState, view_state_from_resource};
