//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format lists as fixed-width columns and single records as `Key: value` blocks.
//!
//! Does NOT handle:
//! - Other output formats.

use crate::formatters::{ConfigOutput, Formatter, RoleMembersOutput};
use anyhow::Result;
use directory_client::{DirectoryObject, Role, User};

mod objects;
mod roles;
mod users;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_roles(&self, roles: &[Role]) -> Result<String> {
        roles::format_roles(roles)
    }

    fn format_role(&self, role: &Role) -> Result<String> {
        roles::format_role(role)
    }

    fn format_role_members(&self, output: &RoleMembersOutput) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!(
            "Role: {} ({})\n\n",
            output.role.display_name.as_deref().unwrap_or(output.role.object_id.as_str()),
            output.role.object_id
        ));
        if output.members.is_empty() {
            out.push_str("No members found.\n");
        } else {
            out.push_str(&users::format_users(&output.members)?);
        }
        Ok(out)
    }

    fn format_users(&self, users: &[User]) -> Result<String> {
        users::format_users(users)
    }

    fn format_user(&self, user: &User) -> Result<String> {
        users::format_user(user)
    }

    fn format_objects(&self, objects: &[DirectoryObject]) -> Result<String> {
        objects::format_objects(objects)
    }

    fn format_config(&self, config: &ConfigOutput) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("Base URL:     {}\n", config.base_url));
        out.push_str(&format!("Tenant:       {}\n", config.tenant));
        out.push_str(&format!("API Version:  {}\n", config.api_version));
        out.push_str(&format!("Timeout:      {}s\n", config.timeout_secs));
        out.push_str(&format!("Skip Verify:  {}\n", config.skip_verify));
        out.push_str(&format!(
            "Access Token: {}\n",
            config.access_token.unwrap_or("(not set)")
        ));
        Ok(out)
    }
}
