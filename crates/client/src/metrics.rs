//! Metrics collection for directory API calls.
//!
//! Records through the `metrics` crate facade:
//! - Request latency histograms
//! - Request and error counters
//! - Record mapping failures
//!
//! # What this module does NOT handle:
//! - Exporting metrics (install a recorder in the host process)
//!
//! # Invariants
//! - All metrics use the label names `endpoint`, `method`, `status`, `error_category`
//! - Recording never fails and never affects the outcome of a call
//! - Zero-cost when no recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "directory_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "directory_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "directory_api_errors_total";

/// Metric name for record mapping failure counter.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "directory_api_deserialization_failures_total";

/// Metric name for pages followed while materializing a collection.
pub const METRIC_PAGES_FOLLOWED: &str = "directory_api_pages_followed_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection, DNS, TLS and other transport failures
    Transport,
    /// Token absent, expired or rejected
    Auth,
    /// Identifier did not resolve
    NotFound,
    /// Other HTTP 4xx responses
    Http4xx,
    /// HTTP 5xx responses
    Http5xx,
    /// Response did not map onto the expected types
    Deserialization,
    /// Request timeout
    Timeout,
    /// Everything else, including local validation failures
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Auth => "auth",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Deserialization => "deserialization",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Unauthorized { .. } => ErrorCategory::Auth,
            ClientError::NotFound(_) => ErrorCategory::NotFound,
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::Deserialization(_) | ClientError::InvalidResponse(_) => {
                ErrorCategory::Deserialization
            }
            ClientError::RemoteError { status, .. } => match status {
                404 => ErrorCategory::NotFound,
                400..=499 => ErrorCategory::Http4xx,
                500..=599 => ErrorCategory::Http5xx,
                _ => ErrorCategory::Unknown,
            },
            ClientError::Http(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::Http(e) if e.is_connect() || e.is_request() => ErrorCategory::Transport,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for directory API calls.
///
/// Thin wrapper around the `metrics` macros so every call site uses the same
/// metric names and labels.
///
/// # Example
///
/// ```rust,ignore
/// use directory_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("directoryRoles", "GET", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    /// Record a record that could not be mapped onto `model_type`.
    pub fn record_deserialization_failure(&self, endpoint: &str, model_type: &str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DESERIALIZATION_FAILURES,
            "endpoint" => endpoint.to_string(),
            "model_type" => model_type.to_string(),
        )
        .increment(1);
    }

    /// Record a continuation page fetched while materializing a collection.
    pub fn record_page_followed(&self, endpoint: &str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_PAGES_FOLLOWED,
            "endpoint" => endpoint.to_string(),
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_as_str() {
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Auth.as_str(), "auth");
        assert_eq!(ErrorCategory::NotFound.as_str(), "not_found");
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::Deserialization.as_str(), "deserialization");
        assert_eq!(ErrorCategory::Timeout.as_str(), "timeout");
        assert_eq!(ErrorCategory::Unknown.as_str(), "unknown");
    }

    fn remote(status: u16) -> ClientError {
        ClientError::RemoteError {
            status,
            url: "test".to_string(),
            code: None,
            message: "failure".to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_error_categorization() {
        assert_eq!(
            ErrorCategory::from(&ClientError::Timeout(Duration::from_secs(1))),
            ErrorCategory::Timeout
        );
        assert_eq!(
            ErrorCategory::from(&ClientError::unauthorized_locally("expired")),
            ErrorCategory::Auth
        );
        assert_eq!(
            ErrorCategory::from(&ClientError::NotFound("r1".to_string())),
            ErrorCategory::NotFound
        );
        assert_eq!(
            ErrorCategory::from(&ClientError::Deserialization("bad".to_string())),
            ErrorCategory::Deserialization
        );
        assert_eq!(ErrorCategory::from(&remote(400)), ErrorCategory::Http4xx);
        assert_eq!(ErrorCategory::from(&remote(404)), ErrorCategory::NotFound);
        assert_eq!(ErrorCategory::from(&remote(503)), ErrorCategory::Http5xx);
        assert_eq!(ErrorCategory::from(&remote(302)), ErrorCategory::Unknown);
        assert_eq!(
            ErrorCategory::from(&ClientError::InvalidUrl("x".to_string())),
            ErrorCategory::Unknown
        );
    }

    #[test]
    fn test_metrics_collector_enabled() {
        assert!(MetricsCollector::new().is_enabled());
        assert!(!MetricsCollector::disabled().is_enabled());
        assert!(!MetricsCollector::default().is_enabled());
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        let collector = MetricsCollector::new();
        collector.record_request("users", "GET");
        collector.record_request_duration("users", "GET", Duration::from_millis(5), Some(200));
        collector.record_client_error("users", "GET", &remote(500));
        collector.record_deserialization_failure("users", "User");
        collector.record_page_followed("users");
    }
}
