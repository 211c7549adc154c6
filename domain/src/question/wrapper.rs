//! Answer-redacted question view.

use super::entities::{Question, QuestionId};
use serde::{Deserialize, Serialize};

/// Title shown on placeholder wrappers when the question service is down.
pub const UNAVAILABLE_TITLE: &str = "Service temporarily unavailable. Please try again later.";

/// Options shown on placeholder wrappers when the question service is down.
pub const UNAVAILABLE_OPTIONS: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];

/// What a quiz taker sees of a question: id, title and the four options.
///
/// There is deliberately no field for the right answer, so a wrapper can be
/// serialized anywhere without leaking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionWrapper {
    pub id: QuestionId,
    #[serde(rename = "questionTitle")]
    pub title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
}

impl QuestionWrapper {
    /// Placeholder wrapper standing in for a question that could not be fetched.
    pub fn unavailable(id: QuestionId) -> Self {
        let [option1, option2, option3, option4] = UNAVAILABLE_OPTIONS.map(str::to_string);
        Self {
            id,
            title: UNAVAILABLE_TITLE.to_string(),
            option1,
            option2,
            option3,
            option4,
        }
    }
}

impl From<&Question> for QuestionWrapper {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            title: q.draft.title.clone(),
            option1: q.draft.option1.clone(),
            option2: q.draft.option2.clone(),
            option3: q.draft.option3.clone(),
            option4: q.draft.option4.clone(),
        }
    }
}

impl From<Question> for QuestionWrapper {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            title: q.draft.title,
            option1: q.draft.option1,
            option2: q.draft.option2,
            option3: q.draft.option3,
            option4: q.draft.option4,
        }
    }
}
