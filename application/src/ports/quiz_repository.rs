//! Quiz repository port

use super::repository_error::RepositoryError;
use async_trait::async_trait;
use quizhive_domain::{NewQuiz, Quiz, QuizId};

/// Port for quiz persistence
///
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Store a quiz and its ordered question list atomically
    async fn insert(&self, quiz: &NewQuiz) -> Result<Quiz, RepositoryError>;

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, RepositoryError>;
}
