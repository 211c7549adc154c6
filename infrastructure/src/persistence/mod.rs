//! SQLite persistence adapters.
//!
//! Each service owns its own database: the question service stores the
//! question bank, the quiz service stores quizzes and their ordered question
//! id lists. There is no cross-database foreign key between them.

mod database;
mod question_repository;
mod quiz_repository;

pub use database::SqliteDatabase;
pub use question_repository::SqliteQuestionRepository;
pub use quiz_repository::SqliteQuizRepository;
