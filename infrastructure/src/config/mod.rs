//! Configuration file loading for quizhive
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZHIVE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizhive.toml` or `./.quizhive.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quizhive/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileQuestionServiceConfig, FileQuizServiceConfig,
    FileRemoteConfig,
};
pub use loader::ConfigLoader;
