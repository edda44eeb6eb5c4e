//! The directory object sum type and its narrowing trait.
//!
//! # What this module handles:
//! - Dispatching a raw API record onto a typed variant by its `objectType`
//! - Narrowing a [`DirectoryObject`] back to a concrete resource type
//!
//! # What this module does NOT handle:
//! - Fetching objects (in [`crate::client`])
//! - Relation support rules (in [`crate::models::links`])
//!
//! # Invariants
//! - Serializing a [`DirectoryObject`] always emits `objectType`, so a
//!   serialized object deserializes back onto the same variant
//! - Discriminators this crate does not model become [`DirectoryObject::Other`]
//!   instead of failing the whole page

use std::fmt;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::models::{Group, Role, User};

/// Wire name of the discriminator field.
pub const OBJECT_TYPE_FIELD: &str = "objectType";

/// Kind of a directory object, as named by the API's `objectType`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Role,
    User,
    Group,
    Other(String),
}

impl ObjectKind {
    /// Parse an `objectType` discriminator.
    pub fn from_object_type(object_type: &str) -> Self {
        match object_type {
            "Role" => Self::Role,
            "User" => Self::User,
            "Group" => Self::Group,
            other => Self::Other(other.to_string()),
        }
    }

    /// The `objectType` discriminator for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Role => "Role",
            Self::User => "User",
            Self::Group => "Group",
            Self::Other(name) => name,
        }
    }

    /// Collection path segment, e.g. `directoryRoles`.
    ///
    /// `None` for kinds without an addressable collection.
    pub fn collection(&self) -> Option<&'static str> {
        match self {
            Self::Role => Some("directoryRoles"),
            Self::User => Some("users"),
            Self::Group => Some("groups"),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory object of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryObject {
    Role(Role),
    User(User),
    Group(Group),
    /// An object whose `objectType` this crate does not model.
    Other {
        object_type: String,
        object_id: String,
    },
}

impl DirectoryObject {
    /// Stable identifier of the object.
    pub fn object_id(&self) -> &str {
        match self {
            Self::Role(role) => &role.object_id,
            Self::User(user) => &user.object_id,
            Self::Group(group) => &group.object_id,
            Self::Other { object_id, .. } => object_id,
        }
    }

    /// Kind discriminator of the object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Role(_) => ObjectKind::Role,
            Self::User(_) => ObjectKind::User,
            Self::Group(_) => ObjectKind::Group,
            Self::Other { object_type, .. } => ObjectKind::Other(object_type.clone()),
        }
    }

    /// Display name, when the variant carries one.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Role(role) => role.display_name.as_deref(),
            Self::User(user) => user.display_name.as_deref(),
            Self::Group(group) => group.display_name.as_deref(),
            Self::Other { .. } => None,
        }
    }

    /// Narrow to a concrete resource type.
    ///
    /// Returns `None` when the variant does not match `T`.
    pub fn narrow<T: DirectoryResource>(self) -> Option<T> {
        T::from_object(self)
    }

    /// Map a raw API record onto a variant by its `objectType`.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let object_type = value
            .get(OBJECT_TYPE_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| format!("record has no '{OBJECT_TYPE_FIELD}' discriminator"))?
            .to_string();

        let object = match ObjectKind::from_object_type(&object_type) {
            ObjectKind::Role => Self::Role(typed_record(value, &object_type)?),
            ObjectKind::User => Self::User(typed_record(value, &object_type)?),
            ObjectKind::Group => Self::Group(typed_record(value, &object_type)?),
            ObjectKind::Other(_) => {
                let object_id = value
                    .get("objectId")
                    .and_then(Value::as_str)
                    .ok_or_else(|| format!("{object_type} record has no 'objectId'"))?
                    .to_string();
                Self::Other {
                    object_type,
                    object_id,
                }
            }
        };

        Ok(object)
    }
}

fn typed_record<T: DeserializeOwned>(value: Value, object_type: &str) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("invalid {object_type} record: {e}"))
}

impl<'de> Deserialize<'de> for DirectoryObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

impl Serialize for DirectoryObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = match self {
            Self::Role(role) => serde_json::to_value(role),
            Self::User(user) => serde_json::to_value(user),
            Self::Group(group) => serde_json::to_value(group),
            Self::Other { object_id, .. } => Ok(serde_json::json!({ "objectId": object_id })),
        }
        .map_err(<S::Error as serde::ser::Error>::custom)?;

        let mut fields = match fields {
            Value::Object(map) => map,
            _ => return Err(serde::ser::Error::custom("directory object is not a map")),
        };
        fields.insert(
            OBJECT_TYPE_FIELD.to_string(),
            Value::String(self.kind().as_str().to_string()),
        );
        fields.serialize(serializer)
    }
}

/// A concrete resource type that can be listed, fetched and narrowed to.
pub trait DirectoryResource: Sized + Clone + Send + 'static {
    /// Kind this resource type represents.
    const KIND: ObjectKind;

    /// Stable identifier of the object.
    fn object_id(&self) -> &str;

    /// Narrowing from the sum type. `None` when the variant does not match.
    fn from_object(object: DirectoryObject) -> Option<Self>;

    /// Widening into the sum type.
    fn into_object(self) -> DirectoryObject;
}

macro_rules! directory_resource {
    ($ty:ident) => {
        impl DirectoryResource for $ty {
            const KIND: ObjectKind = ObjectKind::$ty;

            fn object_id(&self) -> &str {
                &self.object_id
            }

            fn from_object(object: DirectoryObject) -> Option<Self> {
                match object {
                    DirectoryObject::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_object(self) -> DirectoryObject {
                DirectoryObject::$ty(self)
            }
        }

        impl From<$ty> for DirectoryObject {
            fn from(value: $ty) -> Self {
                DirectoryObject::$ty(value)
            }
        }
    };
}

directory_resource!(Role);
directory_resource!(User);
directory_resource!(Group);

/// Keep only the objects of type `T`, preserving order.
pub fn narrow_all<T: DirectoryResource>(
    objects: impl IntoIterator<Item = DirectoryObject>,
) -> Vec<T> {
    objects.into_iter().filter_map(T::from_object).collect()
}
