//! Error types for the directory client.
//!
//! Every façade operation returns [`Result`]; nothing is retried or swallowed
//! inside the client, so the variant a caller sees is the first failure that
//! occurred.

use std::time::Duration;
use thiserror::Error;

use crate::models::LinkRelation;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during directory client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The bearer token was absent, blank, expired, or rejected by the API.
    ///
    /// `status` is the HTTP status for API rejections and `None` when the
    /// token was refused before any request was sent.
    #[error("Authorization required: {message}{}",
        .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Unauthorized { status: Option<u16>, message: String },

    /// The requested object identifier did not resolve.
    #[error("Object not found: {0}")]
    NotFound(String),

    /// Non-success response from the directory API.
    #[error("API error ({status}) at {url}: {message}{}{}",
        .code.as_ref().map(|c| format!(" ({c})")).unwrap_or_default(),
        .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    RemoteError {
        status: u16,
        url: String,
        code: Option<String>,
        message: String,
        request_id: Option<String>,
    },

    /// A response body or record could not be mapped onto the expected type.
    #[error("Failed to deserialize response: {0}")]
    Deserialization(String),

    /// The response was well-formed JSON but violated the paging contract.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The relation is not defined for the source object's kind.
    #[error("Relation '{relation}' is not supported for objects of type '{kind}'")]
    UnsupportedRelation { relation: LinkRelation, kind: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL, tenant, or page token.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates an authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Check if the caller must obtain a fresh token before retrying.
    ///
    /// True for local token rejections and for HTTP 401 from the API. A 403
    /// means the token is valid but lacks permission, so a new token of the
    /// same principal would not help.
    pub fn requires_reauthentication(&self) -> bool {
        match self {
            Self::Unauthorized { status, .. } => *status != Some(403),
            _ => false,
        }
    }

    /// An authorization failure decided before any request was sent.
    pub fn unauthorized_locally(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            status: None,
            message: message.into(),
        }
    }

    /// Check if this error originated in the network layer.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_))
    }

    /// Rewrite a 404 from a by-id request as [`ClientError::NotFound`].
    pub(crate) fn not_found_for(self, object_id: &str) -> Self {
        match self {
            Self::RemoteError { status: 404, .. } => Self::NotFound(object_id.to_string()),
            other => other,
        }
    }
}
