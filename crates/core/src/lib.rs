#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod navigation;
pub mod quiz_session;
pub mod time;
pub mod timer;

pub use error::Error;
pub use quiz_session::{OptionState, QuizSession, QuizSessionError, Score};
pub use time::Clock;
pub use timer::{Countdown, TickOutcome};
