//! Errors shared by the quiz use cases.

use crate::ports::repository_error::RepositoryError;
use quizhive_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while creating, reading, or scoring a quiz.
///
/// Degraded reads and scores are not errors; they come back as
/// [`Upstream::Degraded`](quizhive_domain::Upstream). Only quiz creation turns
/// degradation into [`QuizError::QuestionServiceDegraded`], because a quiz
/// built from placeholder ids would be persisted garbage.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Question service unavailable; quiz not created")]
    QuestionServiceDegraded,

    #[error("Persistence failed: {0}")]
    Persistence(#[from] RepositoryError),

    #[error("Operation cancelled")]
    Cancelled,
}
