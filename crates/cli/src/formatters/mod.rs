//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table, JSON and CSV output formats.
//! - Implement the `Formatter` trait for roles, users and mixed directory objects.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty result |
//! |--------|--------------|
//! | JSON | `[]` |
//! | CSV | header row only |
//! | Table | `No roles found.` style message |
//!
//! ## Missing Values
//!
//! JSON keeps `null`; table and CSV render `N/A` (see `common::DEFAULT_MISSING_VALUE`).

use anyhow::Result;
use directory_client::{DirectoryObject, Role, User};
use serde::Serialize;

mod common;
mod csv;
mod json;
mod table;

pub use common::output_result;
pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json, csv", s),
        }
    }
}

/// A role together with the users that are its members.
#[derive(Debug, Clone, Serialize)]
pub struct RoleMembersOutput {
    pub role: Role,
    pub members: Vec<User>,
}

/// The effective connection settings, with the bearer token redacted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOutput {
    pub base_url: String,
    pub tenant: String,
    pub api_version: String,
    pub timeout_secs: u64,
    pub skip_verify: bool,
    pub access_token: Option<&'static str>,
}

/// Formatter trait for the different output types.
pub trait Formatter {
    fn format_roles(&self, roles: &[Role]) -> Result<String>;

    fn format_role(&self, role: &Role) -> Result<String>;

    /// Format a role and its user members (the "members" view).
    fn format_role_members(&self, output: &RoleMembersOutput) -> Result<String>;

    fn format_users(&self, users: &[User]) -> Result<String>;

    fn format_user(&self, user: &User) -> Result<String>;

    /// Format objects of mixed kinds, e.g. the groups and roles a user belongs to.
    fn format_objects(&self, objects: &[DirectoryObject]) -> Result<String>;

    fn format_config(&self, config: &ConfigOutput) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
