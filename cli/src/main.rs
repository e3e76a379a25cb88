//! CLI entrypoint for prompt-resolver
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use resolver_application::{CacheGateway, ResolvePromptUseCase};
use resolver_domain::{OutputFormat, Prompt};
use resolver_infrastructure::{ConfigLoader, OllamaBackendClient, RedisCacheStore, ResourceMonitor};
use resolver_presentation::{ChatRepl, Cli, ConsoleFormatter, ProgressReporter};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal outside development
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    info!("Starting prompt-resolver");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config = ConfigLoader::load(cli.config.as_deref(), cli.no_config)
        .context("failed to load configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let mut engine = config
        .to_engine_config()
        .context("invalid [engine] configuration")?;
    if let Some(strategy) = cli.strategy {
        engine.strategy = strategy;
    }
    let redis_settings = config
        .cache
        .to_redis_settings()
        .context("invalid [cache] configuration")?;

    // === Dependency Injection ===
    let store = Arc::new(RedisCacheStore::new(redis_settings)?);
    info!("Cache store: {}", store.settings().redacted_dsn());

    if cli.flush_cache {
        CacheGateway::new(store)
            .flush()
            .await
            .context("failed to flush the cache")?;
        println!("Cache cleared.");
        return Ok(());
    }

    let base_url = config
        .backend
        .base_url()
        .context("invalid [backend] configuration")?;
    info!("Backend: {}", base_url);
    let backend = Arc::new(OllamaBackendClient::new(base_url));

    let use_case = ResolvePromptUseCase::new(backend, store, engine);

    if !use_case.cache().ping().await {
        warn!("Cache store is not reachable; answers will not be cached");
    }

    // === Resource monitor ===
    let shutdown = CancellationToken::new();
    let monitor = (config.monitor.enabled && !cli.no_monitor).then(|| {
        ResourceMonitor::new(config.monitor.to_monitor_config()).spawn(shutdown.clone())
    });

    let output: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let show_progress = !cli.quiet && config.repl.show_progress;

    if cli.is_interactive() {
        let mut repl = ChatRepl::new(use_case)
            .with_progress(show_progress)
            .with_output(output)
            .with_history_file(config.repl.history_file.as_deref().map(expand_home));
        repl.run().await?;
    } else {
        for text in &cli.prompts {
            let Some(prompt) = Prompt::try_new(text.as_str()) else {
                warn!("Skipping empty prompt");
                continue;
            };

            let result = if show_progress {
                let progress = ProgressReporter::new();
                use_case.execute_with_progress(&prompt, &progress).await
            } else {
                use_case.execute(&prompt).await
            };

            println!("{}", ConsoleFormatter::render(output, &prompt, &result));
        }
    }

    shutdown.cancel();
    if let Some(handle) = monitor {
        let _ = handle.await;
    }

    Ok(())
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins over `-v`. With `--log-file` the returned guard must be
/// held until exit so buffered lines are flushed.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    match &cli.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .context("--log-file must name a file")?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("cannot create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
