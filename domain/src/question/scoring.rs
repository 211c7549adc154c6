//! Exact-match scoring.

use super::entities::{Question, QuestionId};
use super::response::QuizResponse;
use crate::core::error::DomainError;
use std::collections::HashMap;

/// Right answers for a set of questions, keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct AnswerKey {
    answers: HashMap<QuestionId, String>,
}

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, right_answer: impl Into<String>) {
        self.answers.insert(id, right_answer.into());
    }

    /// Count responses whose answer equals the right answer exactly.
    ///
    /// Every response is scored on its own, so a question answered twice
    /// counts twice. Fails on the first response whose question has no entry
    /// in the key; no partial score is returned.
    pub fn score(&self, responses: &[QuizResponse]) -> Result<u32, DomainError> {
        let mut right = 0;
        for response in responses {
            let answer = self
                .answers
                .get(&response.id)
                .ok_or(DomainError::QuestionNotFound(response.id))?;
            if response.response == *answer {
                right += 1;
            }
        }
        Ok(right)
    }
}

impl<'a> FromIterator<&'a Question> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = &'a Question>>(iter: I) -> Self {
        let mut key = AnswerKey::new();
        for q in iter {
            key.insert(q.id, q.right_answer());
        }
        key
    }
}
