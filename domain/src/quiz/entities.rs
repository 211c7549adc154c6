//! Quiz entities

use crate::core::error::DomainError;
use crate::question::entities::QuestionId;
use crate::question::response::QuizResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier of a persisted quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(i64);

impl QuizId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for QuizId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuizId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quiz that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuiz {
    pub title: String,
    pub question_ids: Vec<QuestionId>,
}

impl NewQuiz {
    pub fn new(title: impl Into<String>, question_ids: Vec<QuestionId>) -> Self {
        Self {
            title: title.into(),
            question_ids,
        }
    }
}

/// A stored quiz (Entity).
///
/// The question list is fixed at creation. Its order is the presentation
/// order and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub question_ids: Vec<QuestionId>,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    pub fn contains(&self, question: QuestionId) -> bool {
        self.question_ids.contains(&question)
    }

    /// Ensure every response refers to a question of this quiz.
    pub fn check_responses(&self, responses: &[QuizResponse]) -> Result<(), DomainError> {
        let foreign: BTreeSet<QuestionId> = responses
            .iter()
            .map(|r| r.id)
            .filter(|id| !self.contains(*id))
            .collect();
        if foreign.is_empty() {
            return Ok(());
        }
        let listed: Vec<String> = foreign.iter().map(ToString::to_string).collect();
        Err(DomainError::ValidationFailed(format!(
            "responses reference questions not in quiz {}: {}",
            self.id,
            listed.join(", ")
        )))
    }
}
