//! Domain layer for quizhive
//!
//! This crate contains the core business logic, entities, and value objects
//! shared by the question service and the quiz service. It has no
//! dependencies on storage, HTTP, or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question Bank
//!
//! A [`Question`] carries its correct answer and never leaves the question
//! service as-is. Everything handed to quiz takers is a [`QuestionWrapper`],
//! the answer-redacted view.
//!
//! ## Quiz
//!
//! A [`Quiz`] is a named, ordered list of question id references. It holds no
//! question content; the quiz service resolves ids through the question
//! service every time.
//!
//! ## Degradation
//!
//! [`Upstream`] marks a value as either live or produced by a fallback, so
//! degraded data can never be mistaken for an authoritative answer.

pub mod core;
pub mod question;
pub mod quiz;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, upstream::Upstream};
pub use question::{
    entities::{Question, QuestionDraft, QuestionId},
    response::QuizResponse,
    scoring::AnswerKey,
    wrapper::QuestionWrapper,
};
pub use quiz::{
    entities::{NewQuiz, Quiz, QuizId},
    spec::{MAX_QUESTIONS, MIN_QUESTIONS, QuizSpec},
};
