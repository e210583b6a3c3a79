mod answers;
mod ids;
mod payment;
mod profile;
mod question;
mod quiz;
mod result;
mod role;

pub use answers::AnswerMap;
pub use ids::{ParseIdError, QuestionId, QuizId, UserId};
pub use payment::{
    CreateOrderRequest, OrderPayload, PaymentConfirmation, Purchase, VerificationResult,
    VerifyPaymentRequest,
};
pub use profile::{Identity, UserProfile, Viewer};
pub use question::Question;
pub use quiz::{DEFAULT_QUIZ_DURATION_SECS, Quiz, QuizDraft, QuizError};
pub use result::{QuizResult, QuizResultError};
pub use role::{ADMIN_ROLE, AuthorizedTabSet, DashboardTab, Role, UnknownTabError};
