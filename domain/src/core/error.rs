//! Domain error types

use crate::question::entities::QuestionId;
use crate::quiz::entities::QuizId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question not found with id: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Quiz not found with id: {0}")]
    QuizNotFound(QuizId),

    #[error("No questions found in category: {0}")]
    EmptyCategory(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl DomainError {
    /// Check if this error means a referenced entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::QuestionNotFound(_)
                | DomainError::QuizNotFound(_)
                | DomainError::EmptyCategory(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_not_found_display() {
        let error = DomainError::QuestionNotFound(QuestionId::new(42));
        assert_eq!(error.to_string(), "Question not found with id: 42");
    }

    #[test]
    fn test_is_not_found_check() {
        assert!(DomainError::QuestionNotFound(QuestionId::new(1)).is_not_found());
        assert!(DomainError::QuizNotFound(QuizId::new(1)).is_not_found());
        assert!(DomainError::EmptyCategory("math".to_string()).is_not_found());
        assert!(!DomainError::ValidationFailed("title".to_string()).is_not_found());
    }
}
