//! Application layer for quizhive
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.
//!
//! The question service runs [`ManageQuestionsUseCase`] and [`QuestionBankUseCase`]
//! over a [`QuestionRepository`]. The quiz service runs [`CreateQuizUseCase`],
//! [`GetQuizQuestionsUseCase`] and [`SubmitQuizUseCase`] over a [`QuizRepository`]
//! and a [`QuestionGateway`] to the question service.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CallPolicy, RetryPolicy};
pub use ports::{
    question_gateway::QuestionGateway,
    question_repository::QuestionRepository,
    quiz_repository::QuizRepository,
    repository_error::RepositoryError,
};
pub use use_cases::create_quiz::{CreateQuizInput, CreateQuizOutput, CreateQuizUseCase};
pub use use_cases::get_quiz_questions::GetQuizQuestionsUseCase;
pub use use_cases::manage_questions::ManageQuestionsUseCase;
pub use use_cases::question_bank::{QuestionBankError, QuestionBankUseCase};
pub use use_cases::quiz_error::QuizError;
pub use use_cases::submit_quiz::{SubmitQuizInput, SubmitQuizUseCase};
