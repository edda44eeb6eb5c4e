//! Directory role model.

use serde::{Deserialize, Serialize};

/// An activated directory role, e.g. "Company Administrator".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub object_id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Identifier of the role template the role was activated from.
    pub role_template_id: Option<String>,
    pub is_system: Option<bool>,
    pub role_disabled: Option<bool>,
}
