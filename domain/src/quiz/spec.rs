//! Quiz assembly request (Value Object)

use crate::core::error::DomainError;

/// Fewest questions a quiz may ask for.
pub const MIN_QUESTIONS: u32 = 5;
/// Most questions a quiz may ask for.
pub const MAX_QUESTIONS: u32 = 20;

/// A validated request to assemble a quiz from one category.
///
/// `num_questions` is an upper bound: the question bank may hold fewer
/// questions in the category, in which case the quiz is shorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSpec {
    category: String,
    num_questions: u32,
    title: String,
}

impl QuizSpec {
    /// Validate and build a spec, reporting every invalid field at once.
    ///
    /// `num_questions` is taken as a signed count so that negative and
    /// oversized requests are reported as out of range.
    pub fn new(
        category: impl Into<String>,
        num_questions: i64,
        title: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let category = category.into();
        let title = title.into();

        let mut problems = Vec::new();
        if category.trim().is_empty() {
            problems.push("categoryName must not be blank".to_string());
        }
        let count = u32::try_from(num_questions)
            .ok()
            .filter(|n| (MIN_QUESTIONS..=MAX_QUESTIONS).contains(n));
        if count.is_none() {
            problems.push(format!(
                "numOfQuestions must be between {} and {}",
                MIN_QUESTIONS, MAX_QUESTIONS
            ));
        }
        if title.trim().is_empty() {
            problems.push("title must not be blank".to_string());
        }

        match count {
            Some(num_questions) if problems.is_empty() => Ok(Self {
                category,
                num_questions,
                title,
            }),
            _ => Err(DomainError::ValidationFailed(problems.join("; "))),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn num_questions(&self) -> u32 {
        self.num_questions
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
