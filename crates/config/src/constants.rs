//! Centralized constants for the directory graph workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default base address of the directory graph API.
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.windows.net";

/// Default `api-version` query parameter sent with every request.
pub const DEFAULT_API_VERSION: &str = "1.6";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// List Pagination Defaults
// =============================================================================

/// Default `$top` page size for list commands.
pub const DEFAULT_LIST_PAGE_SIZE: u32 = 100;

/// Largest `$top` value the directory API accepts.
pub const MAX_PAGE_SIZE: u32 = 999;
