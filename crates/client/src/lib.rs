//! Client-side façade over a directory-graph REST API.
//!
//! Lists and inspects directory roles, users and groups, and resolves
//! relations such as role membership. The caller supplies a bearer token
//! with every operation; this crate never acquires, refreshes or caches
//! credentials or data.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AccessToken;
pub use client::DirectoryClient;
pub use client::builder::DirectoryClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    DirectoryObject, DirectoryResource, Group, LinkRelation, ListFilter, ObjectKind, PageToken,
    PagedResult, Role, User, narrow_all,
};
