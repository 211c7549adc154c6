//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on demand.

use quizhive_application::{CallPolicy, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("remote.timeout_ms cannot be 0")]
    InvalidTimeout,

    #[error("remote.max_attempts cannot be 0")]
    ZeroAttempts,

    #[error("remote.backoff_base_ms ({base}) exceeds remote.backoff_max_ms ({max})")]
    BackoffOutOfOrder { base: u64, max: u64 },

    #[error("remote.base_url is not a valid http(s) URL: {0}")]
    InvalidBaseUrl(String),

    #[error("{0}.bind cannot be empty")]
    EmptyBind(&'static str),
}

/// Raw question service configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionServiceConfig {
    /// Listen address
    pub bind: String,
    /// SQLite file, or `:memory:`
    pub database: String,
}

impl Default for FileQuestionServiceConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8081".to_string(),
            database: "questions.db".to_string(),
        }
    }
}

/// Raw quiz service configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizServiceConfig {
    pub bind: String,
    pub database: String,
}

impl Default for FileQuizServiceConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8090".to_string(),
            database: "quizzes.db".to_string(),
        }
    }
}

/// Raw settings for calls from the quiz service to the question service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRemoteConfig {
    /// Where the question service lives
    pub base_url: String,
    /// Per-attempt timeout in milliseconds
    pub timeout_ms: u64,
    /// Total attempts per call, including the first
    pub max_attempts: u32,
    pub backoff_base_ms: u64,
    pub backoff_max_ms: u64,
}

impl Default for FileRemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8081".to_string(),
            timeout_ms: 2000,
            max_attempts: 3,
            backoff_base_ms: 100,
            backoff_max_ms: 1000,
        }
    }
}

impl FileRemoteConfig {
    /// Convert to the policy the gateway runs under
    pub fn to_call_policy(&self) -> CallPolicy {
        CallPolicy::default()
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_retry(RetryPolicy {
                max_attempts: self.max_attempts,
                base_delay: Duration::from_millis(self.backoff_base_ms),
                max_delay: Duration::from_millis(self.backoff_max_ms),
            })
    }
}

/// Complete raw configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub question_service: FileQuestionServiceConfig,
    pub quiz_service: FileQuizServiceConfig,
    pub remote: FileRemoteConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.question_service.bind.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBind("question_service"));
        }
        if self.quiz_service.bind.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBind("quiz_service"));
        }

        let remote = &self.remote;
        if remote.timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if remote.max_attempts == 0 {
            return Err(ConfigValidationError::ZeroAttempts);
        }
        if remote.backoff_base_ms > remote.backoff_max_ms {
            return Err(ConfigValidationError::BackoffOutOfOrder {
                base: remote.backoff_base_ms,
                max: remote.backoff_max_ms,
            });
        }

        match reqwest::Url::parse(&remote.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err(ConfigValidationError::InvalidBaseUrl(
                remote.base_url.clone(),
            )),
        }
    }
}
