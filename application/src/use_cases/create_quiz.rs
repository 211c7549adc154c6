//! Create Quiz use case.
//!
//! Samples question ids from the question service and persists a quiz over
//! them. Nothing is persisted unless sampling produced live, non-empty data
//! and the caller is still waiting for the answer.

use crate::ports::question_gateway::QuestionGateway;
use crate::ports::quiz_repository::QuizRepository;
use crate::use_cases::quiz_error::QuizError;
use crate::use_cases::shared::{cancellable, check_cancelled};
use quizhive_domain::{DomainError, NewQuiz, Quiz, QuizSpec, Upstream};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Input for the [`CreateQuizUseCase`].
#[derive(Debug, Clone)]
pub struct CreateQuizInput {
    pub spec: QuizSpec,
    /// Cancelling this token abandons the request; no quiz is stored.
    pub cancellation_token: Option<CancellationToken>,
}

impl CreateQuizInput {
    pub fn new(spec: QuizSpec) -> Self {
        Self {
            spec,
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }
}

/// Output of the [`CreateQuizUseCase`].
#[derive(Debug, Clone)]
pub struct CreateQuizOutput {
    pub quiz: Quiz,
    /// True when the category held fewer questions than requested.
    pub short: bool,
}

/// Use case for assembling and storing a new quiz.
#[derive(Clone)]
pub struct CreateQuizUseCase {
    gateway: Arc<dyn QuestionGateway>,
    quizzes: Arc<dyn QuizRepository>,
}

impl CreateQuizUseCase {
    pub fn new(gateway: Arc<dyn QuestionGateway>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { gateway, quizzes }
    }

    pub async fn execute(&self, input: CreateQuizInput) -> Result<CreateQuizOutput, QuizError> {
        let spec = &input.spec;
        let token = &input.cancellation_token;

        let sampled = cancellable(
            token,
            self.gateway
                .sample_random(spec.category(), spec.num_questions()),
        )
        .await?;

        let question_ids = match sampled {
            Upstream::Live(ids) => ids,
            Upstream::Degraded(_) => {
                warn!(
                    "Refusing to create quiz '{}': question service degraded",
                    spec.title()
                );
                return Err(QuizError::QuestionServiceDegraded);
            }
        };

        if question_ids.is_empty() {
            return Err(DomainError::EmptyCategory(spec.category().to_string()).into());
        }

        // Last chance to honour a cancellation before the write
        check_cancelled(token)?;

        let short = question_ids.len() < spec.num_questions() as usize;
        let quiz = self
            .quizzes
            .insert(&NewQuiz::new(spec.title(), question_ids))
            .await?;

        info!(
            "Created quiz {} '{}' with {} questions from '{}'{}",
            quiz.id,
            quiz.title,
            quiz.question_ids.len(),
            spec.category(),
            if short { " (category short)" } else { "" }
        );

        Ok(CreateQuizOutput { quiz, short })
    }
}
