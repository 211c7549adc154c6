//! Question repository port
//!
//! Storage for the question bank. Implementations live in the
//! infrastructure layer.

use super::repository_error::RepositoryError;
use async_trait::async_trait;
use quizhive_domain::{Question, QuestionDraft, QuestionId};

/// Port for question persistence
///
/// Single-row writes must be atomic; `update` and `delete` must check for
/// existence and write in one step.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Number of stored questions across all categories
    async fn count(&self) -> Result<u64, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError>;

    async fn find_by_category(&self, category: &str) -> Result<Vec<Question>, RepositoryError>;

    /// Fetch the questions among `ids` that exist, in no particular order.
    ///
    /// Missing ids are silently absent from the result; callers decide
    /// whether that is an error.
    async fn find_by_ids(&self, ids: &[QuestionId]) -> Result<Vec<Question>, RepositoryError>;

    /// Store a new question and return it with its assigned id
    async fn insert(&self, draft: &QuestionDraft) -> Result<Question, RepositoryError>;

    /// Overwrite an existing question. Returns `None` if `id` does not exist.
    async fn update(
        &self,
        id: QuestionId,
        draft: &QuestionDraft,
    ) -> Result<Option<Question>, RepositoryError>;

    /// Remove a question. Returns `false` if `id` did not exist.
    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError>;

    /// Up to `limit` distinct ids from `category`, chosen uniformly at random.
    ///
    /// Returns fewer ids when the category holds fewer questions.
    async fn random_ids(
        &self,
        category: &str,
        limit: u32,
    ) -> Result<Vec<QuestionId>, RepositoryError>;
}
