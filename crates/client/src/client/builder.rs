//! Client builder for constructing [`DirectoryClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL, tenant and API version
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`DirectoryClient`] methods)
//! - Bearer tokens (passed into every call, never stored on the client)
//!
//! # Invariants
//! - `tenant` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use directory_config::ConnectionConfig;
use directory_config::constants::{
    DEFAULT_API_VERSION, DEFAULT_GRAPH_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
};

use crate::client::DirectoryClient;
use crate::endpoints::ApiTarget;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`DirectoryClient`].
///
/// # Example
///
/// ```rust,ignore
/// use directory_client::DirectoryClient;
///
/// let client = DirectoryClient::builder()
///     .tenant("contoso.onmicrosoft.com")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct DirectoryClientBuilder {
    base_url: String,
    tenant: Option<String>,
    api_version: String,
    skip_verify: bool,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for DirectoryClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            tenant: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl DirectoryClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host, e.g. `https://graph.windows.net`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the tenant: a domain such as `contoso.onmicrosoft.com` or a tenant id.
    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Set the `api-version` query parameter. Default is `1.6`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development endpoints.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Record request metrics through `metrics`.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Take every connection setting from loaded configuration.
    pub fn from_config(mut self, config: &ConnectionConfig) -> Self {
        self.base_url = config.base_url.clone();
        self.tenant = Some(config.tenant.clone());
        self.api_version = config.api_version.clone();
        self.skip_verify = config.skip_verify;
        self.timeout = config.timeout;
        self
    }

    /// Build the [`DirectoryClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the tenant is missing or the
    /// base URL, tenant or API version is invalid.
    /// Returns [`ClientError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<DirectoryClient> {
        let tenant = self
            .tenant
            .ok_or_else(|| ClientError::InvalidUrl("tenant is required".to_string()))?;
        let target = ApiTarget::new(&self.base_url, &tenant, &self.api_version, self.timeout)?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if target.base_url().starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(DirectoryClient {
            http,
            target,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_graph() {
        let client = DirectoryClientBuilder::new()
            .tenant("contoso.onmicrosoft.com")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://graph.windows.net");
        assert_eq!(client.tenant(), "contoso.onmicrosoft.com");
        assert_eq!(client.api_version(), "1.6");
    }

    #[test]
    fn test_missing_tenant() {
        let err = DirectoryClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(msg) if msg.contains("tenant")));
    }

    #[test]
    fn test_normalizes_base_url() {
        let client = DirectoryClientBuilder::new()
            .base_url("https://graph.example.test//")
            .tenant("contoso")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://graph.example.test");
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = DirectoryClientBuilder::new()
            .base_url("graph.example.test")
            .tenant("contoso")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = ConnectionConfig::for_tenant("fabrikam.onmicrosoft.com");
        config.base_url = "https://graph.example.test".to_string();
        config.api_version = "1.5".to_string();
        config.timeout = Duration::from_secs(120);
        config.skip_verify = true;

        let builder = DirectoryClientBuilder::new().from_config(&config);
        assert_eq!(builder.base_url, "https://graph.example.test");
        assert_eq!(builder.tenant.as_deref(), Some("fabrikam.onmicrosoft.com"));
        assert_eq!(builder.api_version, "1.5");
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert!(builder.skip_verify);

        let client = builder.build().unwrap();
        assert_eq!(client.api_version(), "1.5");
    }

    #[test]
    fn test_skip_verify_with_http_url() {
        let client = DirectoryClientBuilder::new()
            .base_url("http://localhost:8080")
            .tenant("contoso")
            .skip_verify(true)
            .build();

        assert!(client.is_ok());
    }
}
