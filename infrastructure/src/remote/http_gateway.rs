//! HTTP gateway to the question service

use super::fallback::QuestionFallback;
use super::retry::{CallFailure, RetryOutcome, with_retry};
use async_trait::async_trait;
use quizhive_application::{CallPolicy, QuestionGateway};
use quizhive_domain::util::preview;
use quizhive_domain::{QuestionId, QuestionWrapper, QuizResponse, Upstream};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{info, warn};

const GENERATE_PATH: &str = "/question/generate";
const EXPAND_PATH: &str = "/question/getQuestions";
const SCORE_PATH: &str = "/question/getScore";

/// [`QuestionGateway`] over the question service's REST API.
///
/// Every call runs under the injected [`CallPolicy`]. When a call cannot be
/// completed the configured [`QuestionFallback`] answers instead and the
/// result is returned as [`Upstream::Degraded`]. Client errors other than
/// 408 and 429 skip the remaining attempts.
pub struct HttpQuestionGateway {
    client: reqwest::Client,
    base_url: String,
    policy: CallPolicy,
    fallback: Arc<dyn QuestionFallback>,
}

impl HttpQuestionGateway {
    pub fn new(
        base_url: impl Into<String>,
        policy: CallPolicy,
        fallback: Arc<dyn QuestionFallback>,
    ) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(policy.timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        info!(
            "HttpQuestionGateway initialized for {} (timeout {}ms, {} attempts)",
            base_url,
            policy.timeout.as_millis(),
            policy.retry.attempts()
        );

        Ok(Self {
            client,
            base_url,
            policy,
            fallback,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CallFailure> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| CallFailure::Transient(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, CallFailure>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| CallFailure::Transient(e.to_string()))?;
        read_json(response).await
    }

    fn settle<T>(
        &self,
        operation: &str,
        outcome: RetryOutcome<T>,
        fallback: impl FnOnce() -> T,
    ) -> Upstream<T> {
        match outcome {
            RetryOutcome::Done(value) => Upstream::Live(value),
            RetryOutcome::GaveUp {
                attempts,
                last_error,
            } => {
                warn!(
                    "Question service call {} failed after {} attempt(s): {}; serving fallback",
                    operation, attempts, last_error
                );
                Upstream::Degraded(fallback())
            }
        }
    }
}

/// Map an HTTP response onto success or a failure, retryable or not.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CallFailure> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| CallFailure::Transient(format!("unreadable response body: {}", e)));
    }

    let transient = status.is_server_error()
        || status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS;
    if transient || !status.is_client_error() {
        return Err(CallFailure::Transient(format!("HTTP {}", status)));
    }

    let body = response.text().await.unwrap_or_default();
    let detail = error_detail(&body).unwrap_or_else(|| status.to_string());
    Err(CallFailure::Permanent(format!("HTTP {}: {}", status, detail)))
}

/// Pull a readable message out of an error body (`{"error": "..."}` or plain text).
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string());
    Some(preview(&message, 200))
}

#[async_trait]
impl QuestionGateway for HttpQuestionGateway {
    async fn sample_random(&self, category: &str, count: u32) -> Upstream<Vec<QuestionId>> {
        let query = [
            ("categoryName", category.to_string()),
            ("numQuestions", count.to_string()),
        ];
        let query = &query;
        let outcome = with_retry("sample_random", &self.policy, move || {
            self.get_json::<Vec<QuestionId>>(GENERATE_PATH, query)
        })
        .await;

        self.settle("sample_random", outcome, || {
            self.fallback.sample_random(category, count)
        })
    }

    async fn expand(&self, ids: &[QuestionId]) -> Upstream<Vec<QuestionWrapper>> {
        let outcome = with_retry("expand", &self.policy, move || {
            self.post_json::<_, Vec<QuestionWrapper>>(EXPAND_PATH, ids)
        })
        .await;

        self.settle("expand", outcome, || self.fallback.expand(ids))
    }

    async fn score(&self, responses: &[QuizResponse]) -> Upstream<u32> {
        let outcome = with_retry("score", &self.policy, move || {
            self.post_json::<_, u32>(SCORE_PATH, responses)
        })
        .await;

        self.settle("score", outcome, || self.fallback.score(responses))
    }
}
