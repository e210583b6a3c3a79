use thiserror::Error;

use crate::model::{ParseIdError, QuizError, QuizResultError};
use crate::quiz_session::QuizSessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Session(#[from] QuizSessionError),
    #[error(transparent)]
    Result(#[from] QuizResultError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizId;

    fn parse_quiz_id(raw: &str) -> Result<QuizId, Error> {
        Ok(QuizId::new(raw)?)
    }

    #[test]
    fn domain_errors_convert_with_question_mark() {
        let err = parse_quiz_id(" ").unwrap_err();
        assert!(matches!(err, Error::Id(_)));
        assert_eq!(err.to_string(), "QuizId cannot be blank");
    }
}
