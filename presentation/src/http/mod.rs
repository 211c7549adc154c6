//! HTTP surface of the two services.
//!
//! - [`question_routes`]: `/question/...`, backed by the question bank
//! - [`quiz_routes`]: `/quiz/...`, backed by the quiz orchestrator
//! - [`error`]: mapping of use case errors onto status codes
//! - [`server`]: listener loop with request tracing and graceful shutdown

pub mod error;
pub mod question_routes;
pub mod quiz_routes;
pub mod server;
