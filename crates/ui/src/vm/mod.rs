mod catalog_vm;
mod checkout_vm;
mod dashboard_vm;
mod navigation_vm;
mod price_fmt;
mod question_vm;
mod quiz_vm;
mod time_fmt;

pub use catalog_vm::{QuizCardVm, map_quiz_cards};
pub use checkout_vm::{CheckoutVm, map_checkout_error};
pub use dashboard_vm::{
    OptedQuizRowVm, ProfileVm, QuestionRowVm, QuizRowVm, ResultRowVm, TabVm, TransactionRowVm,
    map_profile, map_question_rows, map_rows, map_tabs,
};
pub use navigation_vm::{NavEntryVm, NavigationVm, map_navigation};
pub use price_fmt::format_price;
pub use question_vm::{OptionVm, QuestionVm, map_current_question, option_class};
pub use quiz_vm::{QuizIntent, QuizVm, ScoreVm, start_quiz};
pub use time_fmt::{format_countdown, format_datetime, format_duration};
