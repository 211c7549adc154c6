//! Question Gateway port
//!
//! Defines how the quiz service reaches the question service.

use async_trait::async_trait;
use quizhive_domain::{QuestionId, QuestionWrapper, QuizResponse, Upstream};

/// Gateway to the question service
///
/// Operations cannot fail: every answer is either live or a fallback
/// answer tagged [`Upstream::Degraded`]. Implementations must bound each
/// remote attempt by a timeout and are free to retry transient failures
/// before falling back.
#[async_trait]
pub trait QuestionGateway: Send + Sync {
    /// Up to `count` random question ids from `category`
    async fn sample_random(&self, category: &str, count: u32) -> Upstream<Vec<QuestionId>>;

    /// Answer-redacted questions for `ids`, in the same order
    async fn expand(&self, ids: &[QuestionId]) -> Upstream<Vec<QuestionWrapper>>;

    /// Number of correct responses
    async fn score(&self, responses: &[QuizResponse]) -> Upstream<u32>;
}
