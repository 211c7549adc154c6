//! Question service routes (`/question/...`)

use super::error::ApiError;
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use quizhive_application::{
    ManageQuestionsUseCase, QuestionBankError, QuestionBankUseCase, QuestionRepository,
};
use quizhive_domain::{Question, QuestionDraft, QuestionId, QuestionWrapper, QuizResponse};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state of the question service handlers.
#[derive(Clone)]
pub struct QuestionServiceState {
    manage: ManageQuestionsUseCase,
    bank: QuestionBankUseCase,
}

impl QuestionServiceState {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            manage: ManageQuestionsUseCase::new(Arc::clone(&questions)),
            bank: QuestionBankUseCase::new(questions),
        }
    }
}

/// Query string of `GET /question/generate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateParams {
    pub category_name: String,
    pub num_questions: u32,
}

pub fn question_router(state: QuestionServiceState) -> Router {
    Router::new()
        .route("/question", get(health))
        .route("/question/", get(health))
        .route("/question/all-questions", get(all_questions))
        .route("/question/category/{category}", get(questions_by_category))
        .route("/question/add", post(add_question))
        .route("/question/update/{id}", put(update_question))
        .route("/question/delete/{id}", delete(delete_question))
        .route("/question/generate", get(generate))
        .route("/question/getQuestions", post(get_questions))
        .route("/question/getScore", post(get_score))
        .with_state(state)
}

async fn health() -> &'static str {
    "Hello Question service is running"
}

/// An empty bank is reported as 404 with an empty list.
fn listing(result: Result<Vec<Question>, QuestionBankError>) -> Result<Response, ApiError> {
    match result {
        Ok(questions) => Ok(Json(questions).into_response()),
        Err(QuestionBankError::EmptyBank) => {
            Ok((StatusCode::NOT_FOUND, Json(Vec::<Question>::new())).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn all_questions(State(state): State<QuestionServiceState>) -> Result<Response, ApiError> {
    listing(state.manage.list_all().await)
}

async fn questions_by_category(
    State(state): State<QuestionServiceState>,
    Path(category): Path<String>,
) -> Result<Response, ApiError> {
    listing(state.manage.list_by_category(&category).await)
}

async fn add_question(
    State(state): State<QuestionServiceState>,
    payload: Result<Json<QuestionDraft>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(draft) = payload?;
    state.manage.create(draft).await?;
    Ok((StatusCode::CREATED, "Addition Done!"))
}

/// Update and delete report an unknown id as a bad request.
fn unknown_id_is_bad_request(e: QuestionBankError) -> ApiError {
    if e.is_not_found() {
        ApiError::BadRequest("not found!".to_string())
    } else {
        e.into()
    }
}

async fn update_question(
    State(state): State<QuestionServiceState>,
    Path(id): Path<i64>,
    payload: Result<Json<QuestionDraft>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(draft) = payload?;
    state
        .manage
        .update(QuestionId::new(id), draft)
        .await
        .map_err(unknown_id_is_bad_request)?;
    Ok("Update done!")
}

async fn delete_question(
    State(state): State<QuestionServiceState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    state
        .manage
        .delete(QuestionId::new(id))
        .await
        .map_err(unknown_id_is_bad_request)?;
    Ok("Deletion done!")
}

async fn generate(
    State(state): State<QuestionServiceState>,
    query: Result<Query<GenerateParams>, QueryRejection>,
) -> Result<(StatusCode, Json<Vec<QuestionId>>), ApiError> {
    let Query(params) = query?;
    let ids = state
        .bank
        .sample_random(&params.category_name, params.num_questions)
        .await?;
    Ok((StatusCode::CREATED, Json(ids)))
}

async fn get_questions(
    State(state): State<QuestionServiceState>,
    payload: Result<Json<Vec<QuestionId>>, JsonRejection>,
) -> Result<Json<Vec<QuestionWrapper>>, ApiError> {
    let Json(ids) = payload?;
    Ok(Json(state.bank.expand(&ids).await?))
}

async fn get_score(
    State(state): State<QuestionServiceState>,
    payload: Result<Json<Vec<QuizResponse>>, JsonRejection>,
) -> Result<Json<u32>, ApiError> {
    let Json(responses) = payload?;
    Ok(Json(state.bank.score(&responses).await?))
}
