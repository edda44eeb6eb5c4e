//! Shared test utilities for dirgraph integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point the binary at a wiremock server for the test tenant.
//!
//! Invariants / Assumptions:
//! - `GRAPH_ACCESS_TOKEN` is set to "test-token" unless overridden.
//! - `GRAPH_TENANT` is always the fixture tenant.

use assert_cmd::Command;

#[allow(unused_imports)]
pub use directory_client::testing::load_fixture;

pub const TENANT: &str = "contoso.onmicrosoft.com";

#[allow(dead_code)]
pub const ROLE_COMPANY_ADMIN: &str = "f2ef992c-3afb-46b9-b7cf-a126ee74c451";
#[allow(dead_code)]
pub const USER_ADA: &str = "4f6d2c1a-0b7e-4a5f-9d3c-2e1f0a9b8c7d";
#[allow(dead_code)]
pub const USER_GRACE: &str = "9e8d7c6b-5a4f-4e3d-8c2b-1a0f9e8d7c6b";

/// Returns a hermetic `dirgraph` command for integration testing.
///
/// - `DOTENV_DISABLED=1` prevents local `.env` contamination.
/// - Host `GRAPH_*` variables are cleared, then tenant and token are set.
pub fn dirgraph_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dirgraph");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("GRAPH_BASE_URL")
        .env_remove("GRAPH_API_VERSION")
        .env_remove("GRAPH_TIMEOUT")
        .env_remove("GRAPH_SKIP_VERIFY")
        .env_remove("GRAPH_METRICS_BIND")
        .env_remove("RUST_LOG");

    cmd.env("GRAPH_TENANT", TENANT);
    cmd.env("GRAPH_ACCESS_TOKEN", "test-token");

    cmd
}

/// [`dirgraph_cmd`] aimed at `base_url`.
#[allow(dead_code)]
pub fn dirgraph_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = dirgraph_cmd();
    cmd.env("GRAPH_BASE_URL", base_url);
    cmd
}

/// Path of `rest` under the test tenant.
#[allow(dead_code)]
pub fn tenant_path(rest: &str) -> String {
    format!("/{TENANT}/{rest}")
}
