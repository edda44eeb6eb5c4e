//! Paging and filtering types for collection requests.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque continuation for the next page of a collection.
///
/// Wraps the `odata.nextLink` the API returned. Only meaningful to the client
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(String);

impl PageToken {
    pub fn new(next_link: impl Into<String>) -> Self {
        Self(next_link.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of a collection, in the order the API returned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub next_page: Option<PageToken>,
}

impl<T> PagedResult<T> {
    /// Whether a continuation exists.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}

/// Server-side filtering for list requests.
///
/// The `$filter` expression is passed through unmodified; no filtering happens
/// on the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub filter: Option<String>,
    pub top: Option<u32>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the OData `$filter` expression.
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    /// Set the `$top` page size.
    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    /// Query pairs for the request URL. Blank expressions are omitted.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = self
            .filter
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
        {
            pairs.push(("$filter", filter.to_string()));
        }
        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        pairs
    }
}

/// Collection envelope returned by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct ODataCollection {
    #[serde(default)]
    pub value: Vec<Value>,
    #[serde(rename = "odata.nextLink")]
    pub next_link: Option<String>,
}

/// Error envelope returned by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct ODataErrorResponse {
    #[serde(rename = "odata.error")]
    pub error: ODataError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ODataError {
    pub code: Option<String>,
    pub message: Option<ODataMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ODataMessage {
    pub value: Option<String>,
}
