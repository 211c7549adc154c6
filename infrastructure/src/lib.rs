//! Infrastructure layer for quizhive
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: SQLite repositories for questions and quizzes,
//! the HTTP gateway to the question service, and configuration file loading.

pub mod config;
pub mod persistence;
pub mod remote;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileQuestionServiceConfig,
    FileQuizServiceConfig, FileRemoteConfig,
};
pub use persistence::{SqliteDatabase, SqliteQuestionRepository, SqliteQuizRepository};
pub use remote::{
    fallback::{PlaceholderFallback, QuestionFallback},
    http_gateway::HttpQuestionGateway,
};
