//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use directory_client::MetricsCollector;
use directory_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    metrics: &MetricsCollector,
    cancel_token: &CancellationToken,
) -> Result<()> {
    match cli.command {
        Commands::Roles { command } => {
            commands::roles::run(config, command, &cli.output, metrics, cancel_token).await?;
        }
        Commands::Users { command } => {
            commands::users::run(config, command, &cli.output, metrics, cancel_token).await?;
        }
        Commands::Config { command } => {
            commands::config::run(&config, command, &cli.output)?;
        }
    }

    Ok(())
}
