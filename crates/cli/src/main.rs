//! dirgraph - browse directory roles and their members from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Pass the caller's bearer token into every client call.
//! - Render results as table, JSON or CSV and map failures onto exit codes.
//!
//! Does NOT handle:
//! - Token acquisition; the token comes from a prior sign-in.
//! - REST API details (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
#[macro_use]
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use directory_client::{MetricsCollector, MetricsExporter};
use directory_config::ConfigLoader;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt, hint_for};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let metrics = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!(
                    "Metrics exporter started on http://{}/metrics",
                    exporter.bind_addr()
                );
                MetricsCollector::new()
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        None => MetricsCollector::disabled(),
    };

    let config = match cli.config_loader().and_then(|loader| loader.build()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &metrics, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(hint) = hint_for(&e) {
                eprintln!("{}", hint);
            }
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
