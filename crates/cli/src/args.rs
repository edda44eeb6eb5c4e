//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn global options into a `ConfigLoader` with CLI values on top.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{ArgAction, Parser, Subcommand};
use directory_config::{ConfigError, ConfigLoader};
use std::time::Duration;

use crate::commands;

#[derive(Parser)]
#[command(name = "dirgraph")]
#[command(
    about = "Browse directory roles and their members from the command line",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dirgraph --tenant contoso.onmicrosoft.com roles list\n  dirgraph roles list --filter \"displayName eq 'Company Administrator'\"\n  dirgraph roles members f2ef992c-3afb-46b9-b7cf-a126ee74c451 -o json\n  dirgraph users member-of 4f6d2c1a-0b7e-4a5f-9d3c-2e1f0a9b8c7d\n  dirgraph config show\n"
)]
pub struct Cli {
    /// Base URL of the graph service (e.g., https://graph.windows.net)
    #[arg(long, global = true, env = "GRAPH_BASE_URL")]
    pub base_url: Option<String>,

    /// Tenant domain or id (e.g., contoso.onmicrosoft.com)
    #[arg(short, long, global = true, env = "GRAPH_TENANT")]
    pub tenant: Option<String>,

    /// Value of the api-version query parameter
    #[arg(long, global = true, env = "GRAPH_API_VERSION")]
    pub api_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GRAPH_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for test endpoints with self-signed certificates)
    #[arg(long, global = true, env = "GRAPH_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Bearer token obtained from a prior sign-in
    #[arg(short, long, global = true, env = "GRAPH_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Serve Prometheus metrics on this address while the command runs (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, env = "GRAPH_METRICS_BIND", value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and inspect directory roles
    Roles {
        #[command(subcommand)]
        command: commands::roles::RolesCommand,
    },

    /// List and inspect users
    Users {
        #[command(subcommand)]
        command: commands::users::UsersCommand,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}

impl Cli {
    /// Environment first, then CLI values on top.
    ///
    /// Blank CLI values are ignored so the environment can still supply them.
    pub fn config_loader(&self) -> Result<ConfigLoader, ConfigError> {
        let mut loader = ConfigLoader::new().from_env()?;

        if let Some(url) = non_blank(&self.base_url) {
            loader = loader.with_base_url(url);
        }
        if let Some(tenant) = non_blank(&self.tenant) {
            loader = loader.with_tenant(tenant);
        }
        if let Some(version) = non_blank(&self.api_version) {
            loader = loader.with_api_version(version);
        }
        if let Some(token) = non_blank(&self.access_token) {
            loader = loader.with_access_token(token);
        }
        if let Some(secs) = self.timeout {
            loader = loader.with_timeout(Duration::from_secs(secs));
        }
        if self.skip_verify {
            loader = loader.with_skip_verify(true);
        }

        Ok(loader)
    }

    /// Default tracing filter for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
