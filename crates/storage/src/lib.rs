#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, ProfileRepository, PurchaseRepository, QuizRepository,
    QuizResultRepository, Storage, StorageError,
};
