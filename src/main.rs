// Ghostforge - Ghostty to IDE theme converter
//
// Reads Ghostty terminal theme files (16-slot ANSI palette plus a handful
// of named base colors) and derives full IDE theme plugins from them.
//
// Architecture:
// - theme: parses theme files into a Theme record (lossy-tolerant)
// - derive: pure color derivation (the only branching input is dark/light)
// - emit: writes the descriptor/scheme/manifest tree and packages archives
// - batch: drives the pipeline per file, surviving per-file failures

#![recursion_limit = "1024"]

mod batch;
mod cli;
mod color;
mod config;
mod derive;
mod emit;
mod theme;

use clap::Parser;
use config::{Config, LogRotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("ghostforge={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must stay alive for the duration of the program so logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled && std::fs::create_dir_all(&config.logging.file_dir).is_ok()
        {
            let file_appender = match config.logging.file_rotation {
                LogRotation::Hourly => tracing_appender::rolling::hourly(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                ),
                LogRotation::Daily => tracing_appender::rolling::daily(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                ),
                LogRotation::Never => tracing_appender::rolling::never(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                ),
            };
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // File layer uses JSON format for structured log parsing
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            None
        };

    let args = cli::Cli::parse();
    if let Err(e) = cli::run(&args, &config) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
