//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for quizhive
#[derive(Parser, Debug)]
#[command(name = "quizhive")]
#[command(author, version, about = "Question bank and quiz services")]
#[command(long_about = r#"
Quizhive runs two cooperating HTTP services:

1. question-service: stores questions, samples them at random and scores answers
2. quiz-service: assembles quizzes from the question service and serves them

The quiz service keeps working when the question service is down, answering
with clearly marked placeholder data (HTTP 503) instead of failing.

Configuration files are loaded from (in priority order):
1. QUIZHIVE_* environment variables (e.g. QUIZHIVE_REMOTE__TIMEOUT_MS=500)
2. --config <path>     Explicit config file
3. ./quizhive.toml     Project-level config
4. ~/.config/quizhive/config.toml   Global config

Example:
  quizhive question-service --bind 127.0.0.1:8081
  quizhive quiz-service --question-service-url http://127.0.0.1:8081
  quizhive show-config
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the question service
    QuestionService {
        /// Listen address (overrides question_service.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// SQLite database file, or :memory: (overrides question_service.database)
        #[arg(long, value_name = "PATH")]
        database: Option<String>,
    },

    /// Run the quiz service
    QuizService {
        /// Listen address (overrides quiz_service.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// SQLite database file, or :memory: (overrides quiz_service.database)
        #[arg(long, value_name = "PATH")]
        database: Option<String>,

        /// Base URL of the question service (overrides remote.base_url)
        #[arg(long, value_name = "URL")]
        question_service_url: Option<String>,
    },

    /// Show configuration sources and the effective configuration, then exit
    ShowConfig,
}
