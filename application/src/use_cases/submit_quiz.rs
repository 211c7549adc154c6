//! Submit Quiz use case.

use crate::ports::question_gateway::QuestionGateway;
use crate::ports::quiz_repository::QuizRepository;
use crate::use_cases::get_quiz_questions::load_quiz;
use crate::use_cases::quiz_error::QuizError;
use crate::use_cases::shared::cancellable;
use quizhive_domain::{QuizId, QuizResponse, Upstream};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Input for the [`SubmitQuizUseCase`].
#[derive(Debug, Clone)]
pub struct SubmitQuizInput {
    pub quiz_id: QuizId,
    pub responses: Vec<QuizResponse>,
    pub cancellation_token: Option<CancellationToken>,
}

impl SubmitQuizInput {
    pub fn new(quiz_id: QuizId, responses: Vec<QuizResponse>) -> Self {
        Self {
            quiz_id,
            responses,
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }
}

/// Use case for scoring a submitted quiz.
///
/// Stateless: submitting the same answers twice scores them twice and
/// records nothing. Responses must refer to questions of the quiz; scoring
/// itself is delegated to the question service.
#[derive(Clone)]
pub struct SubmitQuizUseCase {
    gateway: Arc<dyn QuestionGateway>,
    quizzes: Arc<dyn QuizRepository>,
}

impl SubmitQuizUseCase {
    pub fn new(gateway: Arc<dyn QuestionGateway>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { gateway, quizzes }
    }

    pub async fn execute(&self, input: SubmitQuizInput) -> Result<Upstream<u32>, QuizError> {
        let quiz = load_quiz(self.quizzes.as_ref(), input.quiz_id).await?;
        quiz.check_responses(&input.responses)?;

        let score = cancellable(
            &input.cancellation_token,
            self.gateway.score(&input.responses),
        )
        .await?;

        match &score {
            Upstream::Live(right) => info!(
                "Quiz {} scored {}/{}",
                quiz.id,
                right,
                input.responses.len()
            ),
            Upstream::Degraded(_) => warn!("Quiz {} scored with fallback", quiz.id),
        }
        Ok(score)
    }
}
