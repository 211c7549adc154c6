//! Presentation layer for quizhive
//!
//! This crate contains the HTTP surface of both services (axum routers,
//! request/response shapes, error-to-status mapping) and the CLI definitions.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use http::error::{ApiError, ErrorResponse};
pub use http::question_routes::{QuestionServiceState, question_router};
pub use http::quiz_routes::{CreateQuizRequest, QuizServiceState, quiz_router};
pub use http::server::serve;
