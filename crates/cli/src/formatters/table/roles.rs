//! Roles table formatter.

use anyhow::Result;
use directory_client::Role;

use crate::formatters::common::{format_missing, format_missing_display, truncate};

/// Format roles as a table.
pub fn format_roles(roles: &[Role]) -> Result<String> {
    let mut output = String::new();

    if roles.is_empty() {
        output.push_str("No roles found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<36} {:<36} {:<8} {}\n",
        "DISPLAY NAME", "OBJECT ID", "SYSTEM", "DESCRIPTION"
    ));
    output.push_str(&format!(
        "{:<36} {:<36} {:<8} {}\n",
        "============", "=========", "======", "==========="
    ));

    for role in roles {
        output.push_str(&format!(
            "{:<36} {:<36} {:<8} {}\n",
            truncate(format_missing(role.display_name.as_deref()), 36),
            role.object_id,
            format_missing_display(role.is_system),
            truncate(format_missing(role.description.as_deref()), 60),
        ));
    }

    Ok(output)
}

/// Format a single role as `Key: value` lines.
pub fn format_role(role: &Role) -> Result<String> {
    let mut output = String::new();
    output.push_str(&format!(
        "Display Name:     {}\n",
        format_missing(role.display_name.as_deref())
    ));
    output.push_str(&format!("Object ID:        {}\n", role.object_id));
    output.push_str(&format!(
        "Description:      {}\n",
        format_missing(role.description.as_deref())
    ));
    output.push_str(&format!(
        "Role Template ID: {}\n",
        format_missing(role.role_template_id.as_deref())
    ));
    output.push_str(&format!(
        "System:           {}\n",
        format_missing_display(role.is_system)
    ));
    output.push_str(&format!(
        "Disabled:         {}\n",
        format_missing_display(role.role_disabled)
    ));
    Ok(output)
}
