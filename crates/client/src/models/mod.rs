//! Data models for directory API responses.
//!
//! Resource types live in per-kind submodules and are re-exported here.

pub mod groups;
pub mod links;
pub mod object;
pub mod paging;
pub mod roles;
pub mod users;

pub use groups::Group;
pub use links::LinkRelation;
pub use object::{DirectoryObject, DirectoryResource, ObjectKind, narrow_all};
pub use paging::{ListFilter, PageToken, PagedResult};
pub(crate) use paging::{ODataCollection, ODataErrorResponse};
pub use roles::Role;
pub use users::User;
