//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (base URL, tenant, API version, timeout, TLS).
//! - Define the main `Config` structure combining connection and the caller's token.
//!
//! Does NOT handle:
//! - Configuration loading from env/overrides (see `loader` module).
//! - Token acquisition; the access token is supplied from outside.
//!
//! Invariants:
//! - Duration fields are serialized as whole seconds.
//! - The access token is a `SecretString` and never appears in `Debug` output.

use crate::constants::{DEFAULT_API_VERSION, DEFAULT_GRAPH_BASE_URL, DEFAULT_TIMEOUT_SECS};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for the remote directory API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the graph service (e.g., https://graph.windows.net)
    pub base_url: String,
    /// Tenant domain or id the directory lives under
    pub tenant: String,
    /// Value sent as the `api-version` query parameter
    pub api_version: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Whether to skip TLS verification (for test endpoints with self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
}

impl ConnectionConfig {
    /// Connection settings for `tenant` against the public graph endpoint.
    pub fn for_tenant(tenant: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            tenant: tenant.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            skip_verify: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Bearer token obtained by an external sign-in flow, if any.
    pub access_token: Option<SecretString>,
}

impl Config {
    /// Whether a bearer token was configured.
    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tenant_uses_defaults() {
        let connection = ConnectionConfig::for_tenant("contoso.onmicrosoft.com");
        assert_eq!(connection.base_url, "https://graph.windows.net");
        assert_eq!(connection.tenant, "contoso.onmicrosoft.com");
        assert_eq!(connection.api_version, "1.6");
        assert_eq!(connection.timeout, Duration::from_secs(30));
        assert!(!connection.skip_verify);
    }

    #[test]
    fn test_connection_serializes_timeout_as_seconds() {
        let connection = ConnectionConfig::for_tenant("contoso.onmicrosoft.com");
        let json = serde_json::to_value(&connection).unwrap();
        assert_eq!(json["timeout"], 30);

        let back: ConnectionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, connection);
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = Config {
            connection: ConnectionConfig::for_tenant("contoso.onmicrosoft.com"),
            access_token: Some(SecretString::new("super-secret".to_string().into())),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(config.has_access_token());
    }
}
