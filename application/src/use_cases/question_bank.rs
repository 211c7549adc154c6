//! Question bank use case.
//!
//! The three read/compute operations the quiz service relies on: random
//! sampling, all-or-nothing expansion to wrappers, and scoring.

use crate::ports::question_repository::QuestionRepository;
use crate::ports::repository_error::RepositoryError;
use quizhive_domain::{AnswerKey, DomainError, QuestionId, QuestionWrapper, QuizResponse};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by the question service use cases.
#[derive(Error, Debug)]
pub enum QuestionBankError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Question bank is empty")]
    EmptyBank,

    #[error("Persistence failed: {0}")]
    Persistence(#[from] RepositoryError),
}

impl QuestionBankError {
    pub fn is_not_found(&self) -> bool {
        match self {
            QuestionBankError::Domain(e) => e.is_not_found(),
            QuestionBankError::EmptyBank => true,
            QuestionBankError::Persistence(_) => false,
        }
    }
}

/// Use case serving quiz data out of the question bank.
#[derive(Clone)]
pub struct QuestionBankUseCase {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionBankUseCase {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Up to `count` distinct random ids from `category`; never padded.
    pub async fn sample_random(
        &self,
        category: &str,
        count: u32,
    ) -> Result<Vec<QuestionId>, QuestionBankError> {
        let ids = self.questions.random_ids(category, count).await?;
        info!(
            "Sampled {} of {} requested questions from category '{}'",
            ids.len(),
            count,
            category
        );
        Ok(ids)
    }

    /// Resolve every id to its wrapper, preserving request order.
    ///
    /// All-or-nothing: if any id is unknown, no wrappers are returned.
    pub async fn expand(
        &self,
        ids: &[QuestionId],
    ) -> Result<Vec<QuestionWrapper>, QuestionBankError> {
        let found: HashMap<QuestionId, QuestionWrapper> = self
            .questions
            .find_by_ids(&distinct(ids.iter().copied()))
            .await?
            .into_iter()
            .map(|q| (q.id, QuestionWrapper::from(q)))
            .collect();

        let wrappers = ids
            .iter()
            .map(|id| {
                found
                    .get(id)
                    .cloned()
                    .ok_or(DomainError::QuestionNotFound(*id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Expanded {} question ids", wrappers.len());
        Ok(wrappers)
    }

    /// Count exact-match answers. Fails if any response names an unknown question.
    pub async fn score(&self, responses: &[QuizResponse]) -> Result<u32, QuestionBankError> {
        let ids = distinct(responses.iter().map(|r| r.id));
        let questions = self.questions.find_by_ids(&ids).await?;
        let key: AnswerKey = questions.iter().collect();
        let right = key.score(responses)?;
        debug!("Scored {} responses: {} right", responses.len(), right);
        Ok(right)
    }
}

/// Deduplicated ids, so repositories are never asked for the same row twice.
fn distinct(ids: impl Iterator<Item = QuestionId>) -> Vec<QuestionId> {
    ids.collect::<BTreeSet<_>>().into_iter().collect()
}
