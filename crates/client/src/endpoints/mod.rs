//! Directory API endpoint implementations.
//!
//! Free functions taking the HTTP client, the [`ApiTarget`] and the bearer
//! token explicitly. [`crate::client::DirectoryClient`] composes them into
//! the public operations.

mod decode;
mod links;
mod objects;
mod request;
mod target;
pub mod url_encoding;

pub use links::{get_single_linked_object, list_linked_objects, list_linked_objects_page};
pub use objects::{get_object, list_objects, list_objects_page};
pub use request::{CLIENT_REQUEST_ID_HEADER, REQUEST_ID_HEADER};
pub use target::ApiTarget;
