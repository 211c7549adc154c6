//! Get Quiz Questions use case.

use crate::ports::question_gateway::QuestionGateway;
use crate::ports::quiz_repository::QuizRepository;
use crate::use_cases::quiz_error::QuizError;
use quizhive_domain::{DomainError, Quiz, QuizId, QuestionWrapper, Upstream};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for serving a quiz's questions to a quiz taker.
///
/// The quiz stores only ids; content is expanded through the question
/// service on every read, in the quiz's stored order. A degraded expansion
/// is passed through as-is so the caller can report it.
#[derive(Clone)]
pub struct GetQuizQuestionsUseCase {
    gateway: Arc<dyn QuestionGateway>,
    quizzes: Arc<dyn QuizRepository>,
}

impl GetQuizQuestionsUseCase {
    pub fn new(gateway: Arc<dyn QuestionGateway>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { gateway, quizzes }
    }

    pub async fn execute(&self, id: QuizId) -> Result<Upstream<Vec<QuestionWrapper>>, QuizError> {
        let quiz = load_quiz(self.quizzes.as_ref(), id).await?;
        let wrappers = self.gateway.expand(&quiz.question_ids).await;
        if wrappers.is_degraded() {
            warn!("Serving placeholder questions for quiz {}", id);
        } else {
            debug!("Serving {} questions for quiz {}", wrappers.value().len(), id);
        }
        Ok(wrappers)
    }
}

/// Look a quiz up, turning absence into [`DomainError::QuizNotFound`].
pub(crate) async fn load_quiz(quizzes: &dyn QuizRepository, id: QuizId) -> Result<Quiz, QuizError> {
    quizzes
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::QuizNotFound(id).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MemoryQuizzes, ScriptedGateway, ids};

    #[tokio::test]
    async fn test_returns_wrappers_for_stored_ids_in_order() {
        let quizzes = Arc::new(MemoryQuizzes::new());
        let quiz = quizzes.seed("T", ids(&[8, 3, 5]));
        let uc = GetQuizQuestionsUseCase::new(Arc::new(ScriptedGateway::live()), quizzes);

        let wrappers = uc.execute(quiz.id).await.unwrap();

        assert!(!wrappers.is_degraded());
        let got: Vec<_> = wrappers.value().iter().map(|w| w.id).collect();
        assert_eq!(got, ids(&[8, 3, 5]));
    }

    #[tokio::test]
    async fn test_propagates_degraded_status() {
        let quizzes = Arc::new(MemoryQuizzes::new());
        let quiz = quizzes.seed("T", ids(&[7]));
        let uc = GetQuizQuestionsUseCase::new(Arc::new(ScriptedGateway::degraded()), quizzes);

        let wrappers = uc.execute(quiz.id).await.unwrap();

        assert!(wrappers.is_degraded());
        assert_eq!(wrappers.value().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_quiz_is_not_found() {
        let uc = GetQuizQuestionsUseCase::new(
            Arc::new(ScriptedGateway::live()),
            Arc::new(MemoryQuizzes::new()),
        );
        let err = uc.execute(QuizId::new(12)).await.unwrap_err();
        assert!(matches!(err, QuizError::Domain(DomainError::QuizNotFound(_))));
    }
}
