//! Manage Questions use case.
//!
//! CRUD over the question bank. Listing distinguishes an empty bank (an
//! error the HTTP layer reports as not found) from an empty category in a
//! non-empty bank (a plain empty list).

use crate::ports::question_repository::QuestionRepository;
use crate::use_cases::question_bank::QuestionBankError;
use quizhive_domain::util::preview;
use quizhive_domain::{DomainError, Question, QuestionDraft, QuestionId};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for question CRUD.
#[derive(Clone)]
pub struct ManageQuestionsUseCase {
    questions: Arc<dyn QuestionRepository>,
}

impl ManageQuestionsUseCase {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    async fn ensure_not_empty(&self) -> Result<(), QuestionBankError> {
        if self.questions.count().await? == 0 {
            return Err(QuestionBankError::EmptyBank);
        }
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<Question>, QuestionBankError> {
        self.ensure_not_empty().await?;
        Ok(self.questions.find_all().await?)
    }

    pub async fn list_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Question>, QuestionBankError> {
        self.ensure_not_empty().await?;
        Ok(self.questions.find_by_category(category).await?)
    }

    pub async fn create(&self, draft: QuestionDraft) -> Result<Question, QuestionBankError> {
        draft.validate()?;
        warn_on_unmatched_answer(&draft);
        let question = self.questions.insert(&draft).await?;
        info!(
            "Added question {} to '{}': {}",
            question.id,
            question.category(),
            preview(question.title(), 60)
        );
        Ok(question)
    }

    /// Overwrite question `id`. The id in the path is authoritative.
    pub async fn update(
        &self,
        id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<Question, QuestionBankError> {
        draft.validate()?;
        warn_on_unmatched_answer(&draft);
        let updated = self
            .questions
            .update(id, &draft)
            .await?
            .ok_or(DomainError::QuestionNotFound(id))?;
        info!("Updated question {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: QuestionId) -> Result<(), QuestionBankError> {
        if !self.questions.delete(id).await? {
            return Err(DomainError::QuestionNotFound(id).into());
        }
        info!("Deleted question {}", id);
        Ok(())
    }
}

fn warn_on_unmatched_answer(draft: &QuestionDraft) {
    if !draft.answer_matches_an_option() {
        warn!(
            "Right answer of '{}' is not one of its options",
            preview(&draft.title, 60)
        );
    }
}
