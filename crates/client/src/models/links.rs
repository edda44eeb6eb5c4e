//! Directed relations between directory objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ObjectKind;

/// A named, directed relationship from a source object to related objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkRelation {
    /// Objects that are members of a role or group.
    Members,
    /// Roles and groups a user or group belongs to.
    MemberOf,
    /// Owners of a group.
    Owners,
    /// The manager of a user. At most one object.
    Manager,
    /// Users reporting to a user.
    DirectReports,
}

impl LinkRelation {
    /// All relations, in declaration order.
    pub const ALL: [LinkRelation; 5] = [
        Self::Members,
        Self::MemberOf,
        Self::Owners,
        Self::Manager,
        Self::DirectReports,
    ];

    /// Navigation path segment appended to the source object's URL.
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::MemberOf => "memberOf",
            Self::Owners => "owners",
            Self::Manager => "manager",
            Self::DirectReports => "directReports",
        }
    }

    /// Whether a source of `kind` defines this relation.
    pub fn supports(self, kind: &ObjectKind) -> bool {
        matches!(
            (self, kind),
            (Self::Members, ObjectKind::Role | ObjectKind::Group)
                | (Self::MemberOf, ObjectKind::User | ObjectKind::Group)
                | (Self::Owners, ObjectKind::Group)
                | (Self::Manager | Self::DirectReports, ObjectKind::User)
        )
    }

    /// Whether the API answers with a single object rather than a collection.
    pub const fn is_single_valued(self) -> bool {
        matches!(self, Self::Manager)
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for LinkRelation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], "").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|relation| relation.path_segment().to_ascii_lowercase() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown relation '{s}', expected one of: {}",
                    Self::ALL.map(|r| r.path_segment()).join(", ")
                )
            })
    }
}
