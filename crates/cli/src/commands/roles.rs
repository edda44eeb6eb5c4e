//! Directory role commands.
//!
//! Responsibilities:
//! - List roles (first page, a continuation, or every page).
//! - Show one role by object id.
//! - Show a role together with the users that are its members.
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by the client crate).
//! - Output formatting details (see formatters module).
//!
//! Invariants:
//! - Only `User` members are listed; groups and service principals in the
//!   membership are dropped by narrowing.
//! - A role with no members prints an empty list, not an error.

use anyhow::{Context, Result};
use clap::Subcommand;
use directory_client::{
    AccessToken, DirectoryClient, DirectoryObject, LinkRelation, MetricsCollector, Role, User,
};
use directory_config::Config;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{
    ListArgs, access_token, build_client_from_config, list_with_args, print_continuation_hint,
};
use crate::formatters::{OutputFormat, RoleMembersOutput, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// List activated directory roles
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one role
    Show {
        /// Object id of the role
        object_id: String,
    },
    /// List the users that are members of a role
    Members {
        /// Object id of the role
        object_id: String,
    },
}

pub async fn run(
    config: Config,
    command: RolesCommand,
    output_format: &str,
    metrics: &MetricsCollector,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = build_client_from_config(&config, metrics)?;
    let token = access_token(&config);

    match command {
        RolesCommand::List { list } => {
            run_list(&client, token.as_ref(), &list, format, cancel).await
        }
        RolesCommand::Show { object_id } => {
            run_show(&client, token.as_ref(), &object_id, format, cancel).await
        }
        RolesCommand::Members { object_id } => {
            run_members(&client, token.as_ref(), &object_id, format, cancel).await
        }
    }
}

async fn run_list(
    client: &DirectoryClient,
    token: Option<&AccessToken>,
    list: &ListArgs,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Listing roles");

    let (roles, next_page) = list_with_args::<Role>(client, token, list, cancel)
        .await
        .context("Failed to list roles")?;

    let output = get_formatter(format).format_roles(&roles)?;
    output_result(&output)?;
    print_continuation_hint(next_page.as_ref());

    Ok(())
}

async fn run_show(
    client: &DirectoryClient,
    token: Option<&AccessToken>,
    object_id: &str,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(object_id, "Fetching role");

    let role = cancellable!(client.get_object::<Role>(token, object_id), cancel)
        .with_context(|| format!("Failed to fetch role '{object_id}'"))?;

    let output = get_formatter(format).format_role(&role)?;
    output_result(&output)?;

    Ok(())
}

async fn run_members(
    client: &DirectoryClient,
    token: Option<&AccessToken>,
    object_id: &str,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(object_id, "Fetching role members");

    let role = cancellable!(client.get_object::<Role>(token, object_id), cancel)
        .with_context(|| format!("Failed to fetch role '{object_id}'"))?;

    let source = DirectoryObject::from(role.clone());
    let members = cancellable!(
        client.get_linked::<User>(token, &source, LinkRelation::Members),
        cancel
    )
    .with_context(|| format!("Failed to list members of role '{object_id}'"))?;

    let output = get_formatter(format).format_role_members(&RoleMembersOutput { role, members })?;
    output_result(&output)?;

    Ok(())
}
