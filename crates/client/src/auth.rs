//! Bearer credentials supplied by the caller.
//!
//! The client never acquires or refreshes tokens. Callers pass an
//! [`AccessToken`] into every operation, and [`bearer`] rejects absent or
//! expired tokens before any request is built.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

/// Opaque bearer credential with optional expiry.
#[derive(Debug, Clone)]
pub struct AccessToken {
    value: SecretString,
    expires_on: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Wrap a raw bearer token.
    ///
    /// Returns `None` for blank input, which callers treat as "no token".
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }
        Some(Self {
            value: SecretString::new(value.into()),
            expires_on: None,
        })
    }

    /// Wrap a token that is already held as a secret.
    pub fn from_secret(value: &SecretString) -> Option<Self> {
        Self::new(value.expose_secret())
    }

    /// Attach the instant the token stops being valid.
    pub fn with_expiry(mut self, expires_on: DateTime<Utc>) -> Self {
        self.expires_on = Some(expires_on);
        self
    }

    pub fn expires_on(&self) -> Option<DateTime<Utc>> {
        self.expires_on
    }

    /// Check if the token is past its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_on.is_some_and(|exp| exp <= now)
    }

    /// Check if the token is past its expiry.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    fn expose(&self) -> &str {
        self.value.expose_secret()
    }
}

/// Resolve the bearer value for a request, or fail with
/// [`ClientError::Unauthorized`] without touching the network.
pub(crate) fn bearer(token: Option<&AccessToken>) -> Result<&str> {
    let token = token.ok_or_else(|| {
        ClientError::unauthorized_locally("no access token supplied; sign-in required")
    })?;

    if token.is_expired() {
        let expired_at = token
            .expires_on
            .map(|exp| exp.to_rfc3339())
            .unwrap_or_default();
        return Err(ClientError::unauthorized_locally(format!(
            "access token expired at {expired_at}"
        )));
    }

    Ok(token.expose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_blank_token_is_absent() {
        assert!(AccessToken::new("").is_none());
        assert!(AccessToken::new("   \t").is_none());
        assert!(AccessToken::new("eyJ0eXAi").is_some());
    }

    #[test]
    fn test_missing_token_is_unauthorized() {
        let err = bearer(None).unwrap_err();
        assert!(err.is_auth_error());
        assert!(err.requires_reauthentication());
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let token = AccessToken::new("eyJ0eXAi")
            .unwrap()
            .with_expiry(Utc::now() - Duration::minutes(5));

        assert!(token.is_expired());
        let err = bearer(Some(&token)).unwrap_err();
        assert!(err.to_string().contains("expired"));
    }

    #[test]
    fn test_unexpired_token_yields_bearer_value() {
        let token = AccessToken::new("eyJ0eXAi")
            .unwrap()
            .with_expiry(Utc::now() + Duration::hours(1));

        assert!(!token.is_expired());
        assert_eq!(bearer(Some(&token)).unwrap(), "eyJ0eXAi");
    }

    #[test]
    fn test_expiry_boundary_is_expired() {
        let now = Utc::now();
        let token = AccessToken::new("eyJ0eXAi").unwrap().with_expiry(now);
        assert!(token.is_expired_at(now));
        assert!(!token.is_expired_at(now - Duration::seconds(1)));
    }

    #[test]
    fn test_token_not_exposed_in_debug() {
        let token = AccessToken::new("super-secret-bearer-value").unwrap();
        let debug_output = format!("{token:?}");
        assert!(!debug_output.contains("super-secret-bearer-value"));
    }

    #[test]
    fn test_from_secret() {
        let secret = SecretString::new("from-config".to_string().into());
        let token = AccessToken::from_secret(&secret).unwrap();
        assert_eq!(bearer(Some(&token)).unwrap(), "from-config");

        let blank = SecretString::new(" ".to_string().into());
        assert!(AccessToken::from_secret(&blank).is_none());
    }
}
