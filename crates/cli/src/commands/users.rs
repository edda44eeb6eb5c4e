//! User commands.
//!
//! Responsibilities:
//! - List users, show one user, and list the groups and roles a user belongs to.
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by the client crate).

use anyhow::{Context, Result};
use clap::Subcommand;
use directory_client::{DirectoryObject, LinkRelation, MetricsCollector, User};
use directory_config::Config;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{
    ListArgs, access_token, build_client_from_config, list_with_args, print_continuation_hint,
};
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List users
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one user
    Show {
        /// Object id or user principal name
        object_id: String,
    },
    /// List the groups and directory roles a user is a member of
    MemberOf {
        /// Object id or user principal name
        object_id: String,
    },
}

pub async fn run(
    config: Config,
    command: UsersCommand,
    output_format: &str,
    metrics: &MetricsCollector,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = build_client_from_config(&config, metrics)?;
    let token = access_token(&config);

    match command {
        UsersCommand::List { list } => {
            info!("Listing users");
            let (users, next_page) = list_with_args::<User>(&client, token.as_ref(), &list, cancel)
                .await
                .context("Failed to list users")?;

            output_result(&get_formatter(format).format_users(&users)?)?;
            print_continuation_hint(next_page.as_ref());
        }
        UsersCommand::Show { object_id } => {
            info!(object_id = %object_id, "Fetching user");
            let user = cancellable!(client.get_object::<User>(token.as_ref(), &object_id), cancel)
                .with_context(|| format!("Failed to fetch user '{object_id}'"))?;

            output_result(&get_formatter(format).format_user(&user)?)?;
        }
        UsersCommand::MemberOf { object_id } => {
            info!(object_id = %object_id, "Fetching user memberships");
            let user = cancellable!(client.get_object::<User>(token.as_ref(), &object_id), cancel)
                .with_context(|| format!("Failed to fetch user '{object_id}'"))?;

            let source = DirectoryObject::from(user);
            let memberships = cancellable!(
                client.get_linked_objects(token.as_ref(), &source, LinkRelation::MemberOf),
                cancel
            )
            .with_context(|| format!("Failed to list memberships of user '{object_id}'"))?;

            output_result(&get_formatter(format).format_objects(&memberships)?)?;
        }
    }

    Ok(())
}
