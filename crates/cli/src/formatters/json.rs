//! JSON formatter implementation.
//!
//! Records are emitted with the API's camelCase field names; mixed object
//! lists keep their `objectType` discriminator.

use crate::formatters::{ConfigOutput, Formatter, RoleMembersOutput};
use anyhow::Result;
use directory_client::{DirectoryObject, Role, User};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_roles(&self, roles: &[Role]) -> Result<String> {
        Ok(serde_json::to_string_pretty(roles)?)
    }

    fn format_role(&self, role: &Role) -> Result<String> {
        Ok(serde_json::to_string_pretty(role)?)
    }

    fn format_role_members(&self, output: &RoleMembersOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }

    fn format_users(&self, users: &[User]) -> Result<String> {
        Ok(serde_json::to_string_pretty(users)?)
    }

    fn format_user(&self, user: &User) -> Result<String> {
        Ok(serde_json::to_string_pretty(user)?)
    }

    fn format_objects(&self, objects: &[DirectoryObject]) -> Result<String> {
        Ok(serde_json::to_string_pretty(objects)?)
    }

    fn format_config(&self, config: &ConfigOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }
}
