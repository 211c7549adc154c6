//! Question entities.
//!
//! Field names on the wire follow the question service's JSON contract:
//! `questionTitle`, `option1`..`option4`, `rightAnswer`, `category`.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a question in the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The writable content of a question (everything but its id).
///
/// Incoming payloads may carry an `id` field; it is ignored; the store
/// assigns ids on create and the path id wins on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub category: String,
    #[serde(rename = "questionTitle")]
    pub title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub right_answer: String,
}

impl QuestionDraft {
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        options: [&str; 4],
        right_answer: impl Into<String>,
    ) -> Self {
        let [option1, option2, option3, option4] = options.map(str::to_string);
        Self {
            category: category.into(),
            title: title.into(),
            option1,
            option2,
            option3,
            option4,
            right_answer: right_answer.into(),
        }
    }

    pub fn options(&self) -> [&str; 4] {
        [&self.option1, &self.option2, &self.option3, &self.option4]
    }

    /// Whether the right answer is literally one of the four options.
    ///
    /// Not enforced on write; callers use this to flag suspicious content.
    pub fn answer_matches_an_option(&self) -> bool {
        self.options().contains(&self.right_answer.as_str())
    }

    /// Reject drafts that cannot be stored meaningfully.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut problems = Vec::new();
        if self.category.trim().is_empty() {
            problems.push("category must not be blank");
        }
        if self.title.trim().is_empty() {
            problems.push("questionTitle must not be blank");
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(DomainError::ValidationFailed(problems.join("; ")))
        }
    }

    /// Attach an id, producing a stored question.
    pub fn with_id(self, id: QuestionId) -> Question {
        Question { id, draft: self }
    }
}

/// A stored question, including the right answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(flatten)]
    pub draft: QuestionDraft,
}

impl Question {
    pub fn category(&self) -> &str {
        &self.draft.category
    }

    pub fn title(&self) -> &str {
        &self.draft.title
    }

    pub fn right_answer(&self) -> &str {
        &self.draft.right_answer
    }

    /// Exact, case-sensitive comparison against the right answer.
    pub fn is_correct(&self, submitted: &str) -> bool {
        submitted == self.draft.right_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft::new("math", "2 + 2 = ?", ["3", "4", "5", "6"], "4")
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let q = draft().with_id(QuestionId::new(7));
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["questionTitle"], "2 + 2 = ?");
        assert_eq!(json["option2"], "4");
        assert_eq!(json["rightAnswer"], "4");
        assert_eq!(json["category"], "math");
    }

    #[test]
    fn test_draft_ignores_incoming_id() {
        let json = r#"{
            "id": 99,
            "category": "math",
            "questionTitle": "1 + 1 = ?",
            "option1": "1", "option2": "2", "option3": "3", "option4": "4",
            "rightAnswer": "2"
        }"#;
        let d: QuestionDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.title, "1 + 1 = ?");
        assert_eq!(d.right_answer, "2");
    }

    #[test]
    fn test_is_correct_is_exact_match() {
        let q = draft().with_id(QuestionId::new(1));
        assert!(q.is_correct("4"));
        assert!(!q.is_correct(" 4"));
        assert!(!q.is_correct("four"));
    }

    #[test]
    fn test_answer_matches_an_option() {
        assert!(draft().answer_matches_an_option());
        let mut odd = draft();
        odd.right_answer = "42".to_string();
        assert!(!odd.answer_matches_an_option());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut d = draft();
        d.category = "  ".to_string();
        d.title = String::new();
        let err = d.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: category must not be blank; questionTitle must not be blank"
        );
        assert!(draft().validate().is_ok());
    }
}
