//! Users table formatter.

use anyhow::Result;
use directory_client::User;

use crate::formatters::common::{format_missing, format_missing_display, truncate};

/// Format users as a table.
pub fn format_users(users: &[User]) -> Result<String> {
    let mut output = String::new();

    if users.is_empty() {
        output.push_str("No users found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<30} {:<40} {:<36} {}\n",
        "DISPLAY NAME", "USER PRINCIPAL NAME", "OBJECT ID", "ENABLED"
    ));
    output.push_str(&format!(
        "{:<30} {:<40} {:<36} {}\n",
        "============", "===================", "=========", "======="
    ));

    for user in users {
        output.push_str(&format!(
            "{:<30} {:<40} {:<36} {}\n",
            truncate(format_missing(user.display_name.as_deref()), 30),
            truncate(format_missing(user.user_principal_name.as_deref()), 40),
            user.object_id,
            format_missing_display(user.account_enabled),
        ));
    }

    Ok(output)
}

/// Format a single user as `Key: value` lines.
pub fn format_user(user: &User) -> Result<String> {
    let fields = [
        ("Display Name", format_missing(user.display_name.as_deref()).to_string()),
        ("Object ID", user.object_id.clone()),
        (
            "User Principal",
            format_missing(user.user_principal_name.as_deref()).to_string(),
        ),
        ("Mail", format_missing(user.mail.as_deref()).to_string()),
        ("Given Name", format_missing(user.given_name.as_deref()).to_string()),
        ("Surname", format_missing(user.surname.as_deref()).to_string()),
        ("Job Title", format_missing(user.job_title.as_deref()).to_string()),
        ("Department", format_missing(user.department.as_deref()).to_string()),
        ("User Type", format_missing(user.user_type.as_deref()).to_string()),
        ("Enabled", format_missing_display(user.account_enabled)),
    ];

    let mut output = String::new();
    for (label, value) in fields {
        output.push_str(&format!("{:<16}{}\n", format!("{label}:"), value));
    }
    Ok(output)
}
