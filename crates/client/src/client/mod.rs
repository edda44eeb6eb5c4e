//! The directory façade and its API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `objects`: Listing and fetching roles, users and groups
//! - `links`: Resolving relations between objects
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token acquisition or refresh (tokens are supplied by the caller)
//!
//! # Invariants
//! - The client holds no mutable state; it is `Send + Sync` and may be shared
//!   across tasks without locking
//! - An absent, blank or expired token fails with `Unauthorized` before any
//!   request is sent
//! - Multi-page results are returned whole or not at all

pub mod builder;

mod links;
mod objects;

use std::collections::HashSet;
use std::future::Future;

use tracing::debug;

use crate::endpoints::ApiTarget;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{PageToken, PagedResult};

/// Client for a directory-graph API tenant.
///
/// Every operation takes the caller's bearer token explicitly.
///
/// ```rust,ignore
/// use directory_client::{AccessToken, DirectoryClient, LinkRelation, Role, User};
///
/// let client = DirectoryClient::builder().tenant("contoso.onmicrosoft.com").build()?;
/// let token = AccessToken::new(raw_token);
///
/// let role: Role = client.get_object(token.as_ref(), role_id).await?;
/// let members: Vec<User> = client
///     .get_linked(token.as_ref(), &role.into(), LinkRelation::Members)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    pub(crate) http: reqwest::Client,
    pub(crate) target: ApiTarget,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl DirectoryClient {
    /// Create a new client builder.
    pub fn builder() -> builder::DirectoryClientBuilder {
        builder::DirectoryClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.target.base_url()
    }

    pub fn tenant(&self) -> &str {
        self.target.tenant()
    }

    pub fn api_version(&self) -> &str {
        self.target.api_version()
    }

    /// Follow continuations from `first` until the collection is exhausted.
    ///
    /// Any failure discards the pages already fetched. A continuation that
    /// repeats is reported as [`ClientError::InvalidResponse`].
    pub(crate) async fn drain_pages<T, F, Fut>(
        &self,
        first: PagedResult<T>,
        endpoint: &str,
        mut fetch: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(PageToken) -> Fut,
        Fut: Future<Output = Result<PagedResult<T>>>,
    {
        let PagedResult {
            mut items,
            mut next_page,
        } = first;
        let mut seen = HashSet::new();

        while let Some(token) = next_page.take() {
            if !seen.insert(token.clone()) {
                return Err(ClientError::InvalidResponse(format!(
                    "continuation repeated while paging {endpoint}"
                )));
            }
            if let Some(m) = &self.metrics {
                m.record_page_followed(endpoint);
            }

            let page = fetch(token).await?;
            debug!(
                endpoint,
                fetched = page.items.len(),
                total = items.len() + page.items.len(),
                "Fetched continuation page"
            );
            items.extend(page.items);
            next_page = page.next_page;
        }

        Ok(items)
    }
}
