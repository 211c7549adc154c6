//! CLI entrypoint for quizhive
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use quizhive_application::QuestionGateway;
use quizhive_infrastructure::{
    ConfigLoader, FileConfig, HttpQuestionGateway, PlaceholderFallback, SqliteDatabase,
    SqliteQuestionRepository, SqliteQuizRepository,
};
use quizhive_presentation::{
    Cli, Command, QuestionServiceState, QuizServiceState, question_router, quiz_router, serve,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(cli.verbose));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        match &cli.config {
            Some(path) => ConfigLoader::load_file(path),
            None => Ok(ConfigLoader::load_defaults()),
        }
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Command::ShowConfig => {
            ConfigLoader::print_config_sources(cli.config.as_ref());
            println!();
            println!("Effective configuration:");
            println!("{}", toml::to_string_pretty(&config)?);
            config.validate()?;
            Ok(())
        }
        Command::QuestionService { bind, database } => {
            let mut config = config;
            if let Some(bind) = bind {
                config.question_service.bind = bind;
            }
            if let Some(database) = database {
                config.question_service.database = database;
            }
            config.validate()?;
            run_question_service(&config).await
        }
        Command::QuizService {
            bind,
            database,
            question_service_url,
        } => {
            let mut config = config;
            if let Some(bind) = bind {
                config.quiz_service.bind = bind;
            }
            if let Some(database) = database {
                config.quiz_service.database = database;
            }
            if let Some(url) = question_service_url {
                config.remote.base_url = url;
            }
            config.validate()?;
            run_quiz_service(&config).await
        }
    }
}

/// Log level selected by the number of `-v` flags.
fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

async fn run_question_service(config: &FileConfig) -> Result<()> {
    let settings = &config.question_service;
    info!("Starting question service (database: {})", settings.database);

    // === Dependency Injection ===
    let db = SqliteDatabase::open(&settings.database)
        .with_context(|| format!("Failed to open {}", settings.database))?;
    let questions = Arc::new(SqliteQuestionRepository::new(db)?);
    let app = question_router(QuestionServiceState::new(questions));

    let listener = TcpListener::bind(&settings.bind)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind))?;
    serve(listener, app, shutdown_on_ctrl_c()).await?;
    Ok(())
}

async fn run_quiz_service(config: &FileConfig) -> Result<()> {
    let settings = &config.quiz_service;
    info!(
        "Starting quiz service (database: {}, question service: {})",
        settings.database, config.remote.base_url
    );

    // === Dependency Injection ===
    let gateway: Arc<dyn QuestionGateway> = Arc::new(HttpQuestionGateway::new(
        config.remote.base_url.as_str(),
        config.remote.to_call_policy(),
        Arc::new(PlaceholderFallback),
    )?);
    let db = SqliteDatabase::open(&settings.database)
        .with_context(|| format!("Failed to open {}", settings.database))?;
    let quizzes = Arc::new(SqliteQuizRepository::new(db)?);

    let shutdown = shutdown_on_ctrl_c();
    let state = QuizServiceState::new(gateway, quizzes).with_shutdown(shutdown.clone());
    let app = quiz_router(state);

    let listener = TcpListener::bind(&settings.bind)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind))?;
    serve(listener, app, shutdown).await?;
    Ok(())
}

/// A token cancelled on the first Ctrl+C.
fn shutdown_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl+C: {}", e);
            return;
        }
        info!("Shutdown requested");
        trigger.cancel();
    });
    token
}
