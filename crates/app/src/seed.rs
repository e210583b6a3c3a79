use quiz_core::model::{
    Question, QuestionId, Quiz, QuizDraft, QuizError, QuizId, UserId, UserProfile,
};
use storage::repository::{ProfileRepository, QuizRepository, Storage};

use crate::BoxError;

fn question(id: &str, text: &str, options: &[&str], correct: &str) -> Result<Question, BoxError> {
    Ok(Question::new(
        QuestionId::new(id)?,
        text,
        options.iter().map(|o| (*o).to_string()).collect(),
        correct,
    ))
}

fn demo_quizzes() -> Result<Vec<Quiz>, BoxError> {
    let rust = QuizDraft {
        id: QuizId::new("rust-basics")?,
        title: "Rust Basics".into(),
        description: Some("Ownership, borrowing and lifetimes.".into()),
        price: 0,
        duration_secs: 120,
        questions: vec![
            question(
                "owner",
                "What happens to a value when its owner goes out of scope?",
                &["It is dropped", "It leaks", "It is copied"],
                "It is dropped",
            )?,
            question(
                "borrow",
                "How many mutable references to a value may exist at once?",
                &["One", "Two", "Unlimited"],
                "One",
            )?,
            question(
                "str",
                "Which type is an owned, growable string?",
                &["&str", "String", "char"],
                "String",
            )?,
        ],
    };
    let capitals = QuizDraft {
        id: QuizId::new("world-capitals")?,
        title: "World Capitals".into(),
        description: Some("A timed tour of capital cities.".into()),
        price: 4900,
        duration_secs: 90,
        questions: vec![
            question("france", "Capital of France?", &["Lyon", "Paris", "Nice"], "Paris")?,
            question("japan", "Capital of Japan?", &["Osaka", "Kyoto", "Tokyo"], "Tokyo")?,
            question("kenya", "Capital of Kenya?", &["Nairobi", "Mombasa"], "Nairobi")?,
            question("canada", "Capital of Canada?", &["Toronto", "Ottawa"], "Ottawa")?,
        ],
    };

    [rust, capitals]
        .into_iter()
        .map(QuizDraft::validate)
        .collect::<Result<Vec<_>, QuizError>>()
        .map_err(Into::into)
}

/// Writes the demo quizzes and, when given, an admin profile.
pub async fn run(storage: &Storage, admin: Option<&UserId>) -> Result<(), BoxError> {
    for quiz in demo_quizzes()? {
        storage.quizzes.upsert_quiz(&quiz).await?;
        tracing::info!(quiz_id = %quiz.id(), "seeded quiz");
    }

    if let Some(user_id) = admin {
        let existing = storage.profiles.get_profile(user_id).await?;
        let profile = existing
            .unwrap_or_else(|| UserProfile::new(user_id.clone(), "Administrator"))
            .with_role(quiz_core::model::ADMIN_ROLE);
        storage.profiles.upsert_profile(&profile).await?;
        tracing::info!(user_id = %user_id, "seeded admin profile");
    }

    Ok(())
}
