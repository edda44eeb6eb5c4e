//! Common test utilities for integration tests.
//!
//! Shared fixtures, identifiers and client construction for the directory
//! client tests. Mock servers are set up with wiremock directly in each test.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here targets [`TENANT`] on the mock server

use std::time::Duration;

#[allow(unused_imports)]
pub use directory_client::testing::load_fixture;

#[allow(unused_imports)]
pub use directory_client::{
    AccessToken, ClientError, DirectoryClient, DirectoryObject, Group, LinkRelation, ListFilter,
    ObjectKind, Role, User,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TENANT: &str = "contoso.onmicrosoft.com";
pub const TEST_TOKEN: &str = "test-token";

#[allow(dead_code)]
pub const ROLE_COMPANY_ADMIN: &str = "f2ef992c-3afb-46b9-b7cf-a126ee74c451";
#[allow(dead_code)]
pub const ROLE_HELPDESK_ADMIN: &str = "8a3c5e1b-6d2f-4f7a-9b0e-1c2d3e4f5a6b";
#[allow(dead_code)]
pub const ROLE_DIRECTORY_READERS: &str = "0b1c2d3e-4f5a-4b6c-8d7e-9f0a1b2c3d4e";
#[allow(dead_code)]
pub const USER_ADA: &str = "4f6d2c1a-0b7e-4a5f-9d3c-2e1f0a9b8c7d";
#[allow(dead_code)]
pub const USER_GRACE: &str = "9e8d7c6b-5a4f-4e3d-8c2b-1a0f9e8d7c6b";
#[allow(dead_code)]
pub const GROUP_RESEARCH_ADMINS: &str = "3c4d5e6f-7a8b-4c9d-8e0f-1a2b3c4d5e6f";

/// Path of `rest` under the test tenant, e.g. `tenant_path("users")`.
#[allow(dead_code)]
pub fn tenant_path(rest: &str) -> String {
    format!("/{TENANT}/{rest}")
}

/// A client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> DirectoryClient {
    DirectoryClient::builder()
        .base_url(server.uri())
        .tenant(TENANT)
        .build()
        .expect("client should build")
}

/// A client with a short request timeout.
#[allow(dead_code)]
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> DirectoryClient {
    DirectoryClient::builder()
        .base_url(server.uri())
        .tenant(TENANT)
        .timeout(timeout)
        .build()
        .expect("client should build")
}

#[allow(dead_code)]
pub fn token() -> AccessToken {
    AccessToken::new(TEST_TOKEN).expect("token is not blank")
}

/// The role R1 from the fixtures, widened to a directory object.
#[allow(dead_code)]
pub fn company_admin_role() -> DirectoryObject {
    serde_json::from_value(load_fixture("roles/get_role.json")).expect("role fixture")
}
