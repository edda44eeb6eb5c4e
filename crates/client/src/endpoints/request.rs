//! Request execution and response status mapping.
//!
//! # What this module handles:
//! - Attaching the bearer token, `Accept` and `client-request-id` headers
//! - Mapping non-success statuses onto [`ClientError`] variants
//! - Recording request metrics
//!
//! # What this module does NOT handle:
//! - Retries (there are none)
//! - Rewriting 404 as `NotFound` (only by-id callers know the id)
//!
//! # Invariants
//! - HTTP 401 and 403 always become [`ClientError::Unauthorized`]
//! - Every other non-success status becomes [`ClientError::RemoteError`]

use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ODataErrorResponse;

/// Header carrying the per-request correlation id.
pub const CLIENT_REQUEST_ID_HEADER: &str = "client-request-id";

/// Header carrying the server-side request id on responses.
pub const REQUEST_ID_HEADER: &str = "request-id";

/// Build an authorized GET request for `url`.
pub(crate) fn authorized_get(client: &Client, url: Url, auth_token: &str) -> RequestBuilder {
    let request_id = Uuid::new_v4();
    debug!(
        method = "GET",
        path = %url.path(),
        client_request_id = %request_id,
        "Sending directory request"
    );

    client
        .get(url)
        .bearer_auth(auth_token)
        .header(ACCEPT, "application/json")
        .header(CLIENT_REQUEST_ID_HEADER, request_id.to_string())
}

/// Send a request and map any non-success status onto a [`ClientError`].
///
/// `endpoint` is a low-cardinality label such as `directoryRoles/{id}`.
pub(crate) async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let started = Instant::now();
    let result = match builder.send().await {
        Ok(response) => {
            if let Some(m) = metrics {
                m.record_request_duration(
                    endpoint,
                    method,
                    started.elapsed(),
                    Some(response.status().as_u16()),
                );
            }
            check_status(response).await
        }
        Err(e) => {
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, started.elapsed(), None);
            }
            if e.is_timeout() {
                Err(ClientError::Timeout(timeout))
            } else {
                Err(ClientError::Http(e))
            }
        }
    };

    if let (Err(e), Some(m)) = (&result, metrics) {
        m.record_client_error(endpoint, method, e);
    }

    result
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let (code, message) = match serde_json::from_str::<ODataErrorResponse>(&body) {
        Ok(parsed) => (
            parsed.error.code,
            parsed
                .error
                .message
                .and_then(|m| m.value)
                .unwrap_or_else(|| status_text(status)),
        ),
        Err(_) if body.trim().is_empty() => (None, status_text(status)),
        Err(_) => (None, body),
    };

    warn!(
        status = status.as_u16(),
        code = code.as_deref().unwrap_or(""),
        request_id = request_id.as_deref().unwrap_or(""),
        "Directory request failed"
    );

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Unauthorized {
            status: Some(status.as_u16()),
            message,
        });
    }

    Err(ClientError::RemoteError {
        status: status.as_u16(),
        url,
        code,
        message,
        request_id,
    })
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}
