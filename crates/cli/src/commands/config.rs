//! Configuration inspection command.
//!
//! Prints the connection settings the other commands would use, after `.env`,
//! environment and CLI layering. The bearer token is never printed.

use anyhow::Result;
use clap::Subcommand;
use directory_config::Config;

use crate::formatters::{ConfigOutput, OutputFormat, get_formatter, output_result};

/// Placeholder shown instead of a configured token.
const REDACTED: &str = "[REDACTED]";

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective connection settings
    Show,
}

pub fn run(config: &Config, command: ConfigCommand, output_format: &str) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let format = OutputFormat::from_str(output_format)?;
            let output = get_formatter(format).format_config(&summarize(config))?;
            output_result(&output)
        }
    }
}

fn summarize(config: &Config) -> ConfigOutput {
    let connection = &config.connection;
    ConfigOutput {
        base_url: connection.base_url.clone(),
        tenant: connection.tenant.clone(),
        api_version: connection.api_version.clone(),
        timeout_secs: connection.timeout.as_secs(),
        skip_verify: connection.skip_verify,
        access_token: config.has_access_token().then_some(REDACTED),
    }
}
