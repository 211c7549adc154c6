//! Fallback answers used when the question service is unreachable.

use quizhive_domain::{QuestionId, QuestionWrapper, QuizResponse};

/// Produces stand-in results for each gateway operation.
///
/// Fallback output is always wrapped as degraded by the gateway; an
/// implementation only decides the shape of the placeholder data.
pub trait QuestionFallback: Send + Sync {
    fn sample_random(&self, category: &str, count: u32) -> Vec<QuestionId>;

    fn expand(&self, ids: &[QuestionId]) -> Vec<QuestionWrapper>;

    fn score(&self, responses: &[QuizResponse]) -> u32;
}

/// Default fallback: sequential ids, "service unavailable" wrappers, zero score.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFallback;

impl QuestionFallback for PlaceholderFallback {
    /// Ids `1..=count`. These are not real questions.
    fn sample_random(&self, _category: &str, count: u32) -> Vec<QuestionId> {
        (1..=i64::from(count)).map(QuestionId::new).collect()
    }

    fn expand(&self, ids: &[QuestionId]) -> Vec<QuestionWrapper> {
        ids.iter().copied().map(QuestionWrapper::unavailable).collect()
    }

    fn score(&self, _responses: &[QuizResponse]) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizhive_domain::question::wrapper::UNAVAILABLE_TITLE;

    #[test]
    fn test_sample_is_sequential() {
        let ids = PlaceholderFallback.sample_random("math", 5);
        let raw: Vec<i64> = ids.iter().map(QuestionId::value).collect();
        assert_eq!(raw, vec![1, 2, 3, 4, 5]);
        assert!(PlaceholderFallback.sample_random("math", 0).is_empty());
    }

    #[test]
    fn test_expand_one_placeholder_per_id() {
        let wrappers = PlaceholderFallback.expand(&[QuestionId::new(7), QuestionId::new(7)]);
        assert_eq!(wrappers.len(), 2);
        assert!(wrappers.iter().all(|w| w.id == QuestionId::new(7)));
        assert!(wrappers.iter().all(|w| w.title == UNAVAILABLE_TITLE));
    }

    #[test]
    fn test_score_is_zero() {
        let responses = [QuizResponse::new(QuestionId::new(1), "A")];
        assert_eq!(PlaceholderFallback.score(&responses), 0);
    }
}
