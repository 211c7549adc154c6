//! Quiz service routes (`/quiz/...`)
//!
//! Degraded answers from the question service are still returned with
//! their placeholder payload, but under `503 Service Unavailable` so clients
//! can tell them apart from real data.

use super::error::ApiError;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use quizhive_application::{
    CreateQuizInput, CreateQuizUseCase, GetQuizQuestionsUseCase, QuestionGateway, QuizRepository,
    SubmitQuizInput, SubmitQuizUseCase,
};
use quizhive_domain::{QuizId, QuizResponse, QuizSpec, Upstream};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Shared state of the quiz service handlers.
#[derive(Clone)]
pub struct QuizServiceState {
    create: CreateQuizUseCase,
    get: GetQuizQuestionsUseCase,
    submit: SubmitQuizUseCase,
    shutdown: CancellationToken,
}

impl QuizServiceState {
    pub fn new(gateway: Arc<dyn QuestionGateway>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self {
            create: CreateQuizUseCase::new(Arc::clone(&gateway), Arc::clone(&quizzes)),
            get: GetQuizQuestionsUseCase::new(Arc::clone(&gateway), Arc::clone(&quizzes)),
            submit: SubmitQuizUseCase::new(gateway, quizzes),
            shutdown: CancellationToken::new(),
        }
    }

    /// Abort in-flight creates and submits when `token` is cancelled.
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }
}

/// Body of `POST /quiz/create`.
///
/// Missing or null fields are left to validation so they are reported by
/// name. The count is signed so negative values reach the range check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateQuizRequest {
    pub category_name: Option<String>,
    pub num_of_questions: Option<i64>,
    pub title: Option<String>,
}

pub fn quiz_router(state: QuizServiceState) -> Router {
    Router::new()
        .route("/quiz", get(health))
        .route("/quiz/", get(health))
        .route("/quiz/create", post(create_quiz))
        .route("/quiz/get/{id}", get(get_quiz_questions))
        .route("/quiz/submit/{id}", post(submit_quiz))
        .with_state(state)
}

async fn health() -> &'static str {
    "Hello Quiz service is running"
}

/// Live data is 200; degraded data is the same body under 503.
fn upstream_response<T: Serialize>(value: Upstream<T>) -> Response {
    match value {
        Upstream::Live(v) => Json(v).into_response(),
        Upstream::Degraded(v) => (StatusCode::SERVICE_UNAVAILABLE, Json(v)).into_response(),
    }
}

async fn create_quiz(
    State(state): State<QuizServiceState>,
    payload: Result<Json<CreateQuizRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let spec = QuizSpec::new(
        request.category_name.unwrap_or_default(),
        request.num_of_questions.unwrap_or_default(),
        request.title.unwrap_or_default(),
    )?;
    let input = CreateQuizInput::new(spec).with_cancellation(state.shutdown.child_token());
    let output = state.create.execute(input).await?;

    let location = format!("/quiz/get/{}", output.quiz.id);
    Ok((StatusCode::OK, [(header::LOCATION, location)], "Success").into_response())
}

async fn get_quiz_questions(
    State(state): State<QuizServiceState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let wrappers = state.get.execute(QuizId::new(id)).await?;
    Ok(upstream_response(wrappers))
}

async fn submit_quiz(
    State(state): State<QuizServiceState>,
    Path(id): Path<i64>,
    payload: Result<Json<Vec<QuizResponse>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(responses) = payload?;
    let input = SubmitQuizInput::new(QuizId::new(id), responses)
        .with_cancellation(state.shutdown.child_token());
    let score = state.submit.execute(input).await?;
    Ok(upstream_response(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quizhive_domain::{QuestionId, QuestionWrapper};
    use quizhive_infrastructure::{
        PlaceholderFallback, QuestionFallback, SqliteDatabase, SqliteQuizRepository,
    };
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    /// In-process question service with categories "math" (ids 1..=3, answer "B").
    struct FakeQuestions {
        degraded: bool,
    }

    #[async_trait]
    impl QuestionGateway for FakeQuestions {
        async fn sample_random(&self, category: &str, count: u32) -> Upstream<Vec<QuestionId>> {
            if self.degraded {
                return Upstream::Degraded(PlaceholderFallback.sample_random(category, count));
            }
            let ids = if category == "math" {
                (1..=3).map(QuestionId::new).collect()
            } else {
                Vec::new()
            };
            Upstream::Live(ids)
        }

        async fn expand(&self, ids: &[QuestionId]) -> Upstream<Vec<QuestionWrapper>> {
            if self.degraded {
                return Upstream::Degraded(PlaceholderFallback.expand(ids));
            }
            let wrappers = ids
                .iter()
                .map(|id| QuestionWrapper {
                    id: *id,
                    title: format!("Question {}", id),
                    option1: "A".to_string(),
                    option2: "B".to_string(),
                    option3: "C".to_string(),
                    option4: "D".to_string(),
                })
                .collect();
            Upstream::Live(wrappers)
        }

        async fn score(&self, responses: &[QuizResponse]) -> Upstream<u32> {
            if self.degraded {
                return Upstream::Degraded(PlaceholderFallback.score(responses));
            }
            Upstream::Live(responses.iter().filter(|r| r.response == "B").count() as u32)
        }
    }

    async fn spawn_quiz_service(degraded: bool) -> String {
        let db = SqliteDatabase::open_in_memory().unwrap();
        let quizzes = Arc::new(SqliteQuizRepository::new(db).unwrap());
        let state = QuizServiceState::new(Arc::new(FakeQuestions { degraded }), quizzes);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, quiz_router(state)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn create(base: &str, body: Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/quiz/create", base))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let base = spawn_quiz_service(false).await;
        let body = reqwest::get(format!("{}/quiz/", base))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "Hello Quiz service is running");
    }

    #[tokio::test]
    async fn test_create_get_and_submit() {
        let base = spawn_quiz_service(false).await;

        let resp = create(
            &base,
            json!({"categoryName": "math", "numOfQuestions": 5, "title": "T"}),
        )
        .await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["location"], "/quiz/get/1");
        assert_eq!(resp.text().await.unwrap(), "Success");

        let resp = reqwest::get(format!("{}/quiz/get/1", base)).await.unwrap();
        assert_eq!(resp.status(), 200);
        let wrappers: Vec<Value> = resp.json().await.unwrap();
        let ids: Vec<i64> = wrappers.iter().map(|w| w["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(wrappers.iter().all(|w| w.get("rightAnswer").is_none()));

        let resp = reqwest::Client::new()
            .post(format!("{}/quiz/submit/1", base))
            .json(&json!([
                {"id": 1, "response": "B"},
                {"id": 2, "response": "C"},
                {"id": 3, "response": "B"}
            ]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.json::<u32>().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_reports_every_invalid_field() {
        let base = spawn_quiz_service(false).await;

        let resp = create(
            &base,
            json!({"categoryName": " ", "numOfQuestions": 3, "title": ""}),
        )
        .await;
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("categoryName must not be blank"));
        assert!(message.contains("numOfQuestions must be between 5 and 20"));
        assert!(message.contains("title must not be blank"));

        let resp = create(&base, json!({"categoryName": "math", "title": "T"})).await;
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_and_mistyped_fields() {
        let base = spawn_quiz_service(false).await;

        let resp = create(
            &base,
            json!({"categoryName": "math", "numOfQuestions": -1, "title": "T"}),
        )
        .await;
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("numOfQuestions must be between 5 and 20")
        );

        let resp = create(
            &base,
            json!({"categoryName": "math", "numOfQuestions": "7", "title": "T"}),
        )
        .await;
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].is_string());

        let resp = create(
            &base,
            json!({"categoryName": null, "numOfQuestions": 5, "title": "T"}),
        )
        .await;
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("categoryName must not be blank")
        );

        let resp = create(
            &base,
            json!({"categoryName": "math", "numOfQuestions": 4294967301u64, "title": "T"}),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let resp = reqwest::Client::new()
            .post(format!("{}/quiz/submit/1", base))
            .header("content-type", "application/json")
            .body("not json")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn test_create_empty_category_is_404() {
        let base = spawn_quiz_service(false).await;
        let resp = create(
            &base,
            json!({"categoryName": "history", "numOfQuestions": 5, "title": "T"}),
        )
        .await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_unknown_quiz_is_404() {
        let base = spawn_quiz_service(false).await;
        let resp = reqwest::get(format!("{}/quiz/get/42", base)).await.unwrap();
        assert_eq!(resp.status(), 404);

        let resp = reqwest::Client::new()
            .post(format!("{}/quiz/submit/42", base))
            .json(&json!([]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_submit_foreign_question_is_400() {
        let base = spawn_quiz_service(false).await;
        create(
            &base,
            json!({"categoryName": "math", "numOfQuestions": 5, "title": "T"}),
        )
        .await;

        let resp = reqwest::Client::new()
            .post(format!("{}/quiz/submit/1", base))
            .json(&json!([{"id": 99, "response": "B"}]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn test_degraded_create_is_503_and_not_persisted() {
        let base = spawn_quiz_service(true).await;
        let resp = create(
            &base,
            json!({"categoryName": "math", "numOfQuestions": 5, "title": "T"}),
        )
        .await;
        assert_eq!(resp.status(), 503);

        let resp = reqwest::get(format!("{}/quiz/get/1", base)).await.unwrap();
        assert_eq!(resp.status(), 404);
    }
}
