//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format resources as RFC 4180 CSV through the `csv` crate writer.
//!
//! Does NOT handle:
//! - Single-record detail layouts; a single record is a one-row table.

use crate::formatters::common::{format_missing, format_missing_display};
use crate::formatters::{ConfigOutput, Formatter, RoleMembersOutput};
use anyhow::{Context, Result};
use directory_client::{DirectoryObject, Role, User};

const ROLE_HEADER: [&str; 6] = [
    "objectId",
    "displayName",
    "description",
    "roleTemplateId",
    "isSystem",
    "roleDisabled",
];

const USER_HEADER: [&str; 10] = [
    "objectId",
    "displayName",
    "userPrincipalName",
    "mail",
    "givenName",
    "surname",
    "jobTitle",
    "department",
    "accountEnabled",
    "userType",
];

const OBJECT_HEADER: [&str; 3] = ["objectType", "objectId", "displayName"];

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_roles(&self, roles: &[Role]) -> Result<String> {
        write_rows(&ROLE_HEADER, roles.iter().map(role_row))
    }

    fn format_role(&self, role: &Role) -> Result<String> {
        self.format_roles(std::slice::from_ref(role))
    }

    /// Only the member rows; the role itself is not repeated per row.
    fn format_role_members(&self, output: &RoleMembersOutput) -> Result<String> {
        self.format_users(&output.members)
    }

    fn format_users(&self, users: &[User]) -> Result<String> {
        write_rows(&USER_HEADER, users.iter().map(user_row))
    }

    fn format_user(&self, user: &User) -> Result<String> {
        self.format_users(std::slice::from_ref(user))
    }

    fn format_objects(&self, objects: &[DirectoryObject]) -> Result<String> {
        write_rows(
            &OBJECT_HEADER,
            objects.iter().map(|object| {
                vec![
                    object.kind().as_str().to_string(),
                    object.object_id().to_string(),
                    format_missing(object.display_name()).to_string(),
                ]
            }),
        )
    }

    fn format_config(&self, config: &ConfigOutput) -> Result<String> {
        write_rows(
            &[
                "baseUrl",
                "tenant",
                "apiVersion",
                "timeoutSecs",
                "skipVerify",
                "accessToken",
            ],
            std::iter::once(vec![
                config.base_url.clone(),
                config.tenant.clone(),
                config.api_version.clone(),
                config.timeout_secs.to_string(),
                config.skip_verify.to_string(),
                format_missing(config.access_token).to_string(),
            ]),
        )
    }
}

fn role_row(role: &Role) -> Vec<String> {
    vec![
        role.object_id.clone(),
        format_missing(role.display_name.as_deref()).to_string(),
        format_missing(role.description.as_deref()).to_string(),
        format_missing(role.role_template_id.as_deref()).to_string(),
        format_missing_display(role.is_system),
        format_missing_display(role.role_disabled),
    ]
}

fn user_row(user: &User) -> Vec<String> {
    vec![
        user.object_id.clone(),
        format_missing(user.display_name.as_deref()).to_string(),
        format_missing(user.user_principal_name.as_deref()).to_string(),
        format_missing(user.mail.as_deref()).to_string(),
        format_missing(user.given_name.as_deref()).to_string(),
        format_missing(user.surname.as_deref()).to_string(),
        format_missing(user.job_title.as_deref()).to_string(),
        format_missing(user.department.as_deref()).to_string(),
        format_missing_display(user.account_enabled),
        format_missing(user.user_type.as_deref()).to_string(),
    ]
}

fn write_rows(header: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}
