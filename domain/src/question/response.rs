//! Submitted answers.

use super::entities::QuestionId;
use serde::{Deserialize, Serialize};

/// One answer submitted by a quiz taker. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub id: QuestionId,
    pub response: String,
}

impl QuizResponse {
    pub fn new(id: QuestionId, response: impl Into<String>) -> Self {
        Self {
            id,
            response: response.into(),
        }
    }
}
