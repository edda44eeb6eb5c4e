//! URL construction for a tenant on a directory API host.
//!
//! # Invariants
//! - Every URL produced here carries the `api-version` query parameter
//! - Continuation links are only followed on the configured origin, so the
//!   bearer token is never sent to a host named in a response body

use std::time::Duration;

use reqwest::Url;

use crate::endpoints::url_encoding::{encode_path_segment, is_dot_segment};
use crate::error::{ClientError, Result};
use crate::models::{LinkRelation, ObjectKind, PageToken};

/// Address of one tenant on a directory API host.
#[derive(Debug, Clone)]
pub struct ApiTarget {
    base_url: String,
    tenant: String,
    tenant_root: Url,
    api_version: String,
    timeout: Duration,
}

impl ApiTarget {
    /// Create a target for `tenant` under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL is not an absolute
    /// http(s) URL, or if the tenant or API version is blank.
    pub fn new(base_url: &str, tenant: &str, api_version: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let tenant = tenant.trim().to_string();
        let api_version = api_version.trim().to_string();

        if tenant.is_empty() {
            return Err(ClientError::InvalidUrl("tenant is required".to_string()));
        }
        if api_version.is_empty() {
            return Err(ClientError::InvalidUrl("api_version is required".to_string()));
        }

        let root = format!("{}/{}/", base_url, encode_path_segment(&tenant));
        let tenant_root = Url::parse(&root)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(tenant_root.scheme(), "http" | "https") || !tenant_root.has_host() {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url}: expected an http(s) URL with a host"
            )));
        }

        Ok(Self {
            base_url,
            tenant,
            tenant_root,
            api_version,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base}/{tenant}/{collection}`
    pub fn collection_url(&self, kind: &ObjectKind) -> Result<Url> {
        self.join(collection_of(kind)?)
    }

    /// `{base}/{tenant}/{collection}/{id}`
    pub fn object_url(&self, kind: &ObjectKind, object_id: &str) -> Result<Url> {
        self.join(&format!(
            "{}/{}",
            collection_of(kind)?,
            object_segment(object_id)?
        ))
    }

    /// `{base}/{tenant}/{collection}/{id}/{relation}`
    pub fn link_url(
        &self,
        kind: &ObjectKind,
        object_id: &str,
        relation: LinkRelation,
    ) -> Result<Url> {
        self.join(&format!(
            "{}/{}/{}",
            collection_of(kind)?,
            object_segment(object_id)?,
            relation.path_segment()
        ))
    }

    /// Resolve an `odata.nextLink` against the tenant root.
    ///
    /// Relative links are joined onto `{base}/{tenant}/`. Absolute links are
    /// accepted only on the configured origin.
    pub fn resolve_next_link(&self, page: &PageToken) -> Result<Url> {
        let link = page.as_str().trim();
        if link.is_empty() {
            return Err(ClientError::InvalidUrl("page token is empty".to_string()));
        }

        let mut url = match Url::parse(link) {
            Ok(absolute) => {
                if absolute.origin() != self.tenant_root.origin() {
                    return Err(ClientError::InvalidUrl(format!(
                        "page token points outside {}",
                        self.base_url
                    )));
                }
                absolute
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .tenant_root
                .join(link)
                .map_err(|e| ClientError::InvalidUrl(format!("page token: {e}")))?,
            Err(e) => return Err(ClientError::InvalidUrl(format!("page token: {e}"))),
        };

        self.ensure_api_version(&mut url);
        Ok(url)
    }

    fn join(&self, path: &str) -> Result<Url> {
        let mut url = self
            .tenant_root
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))?;
        self.ensure_api_version(&mut url);
        Ok(url)
    }

    fn ensure_api_version(&self, url: &mut Url) {
        if !url.query_pairs().any(|(key, _)| key == "api-version") {
            url.query_pairs_mut()
                .append_pair("api-version", &self.api_version);
        }
    }
}

fn object_segment(object_id: &str) -> Result<String> {
    let object_id = object_id.trim();
    if object_id.is_empty() || is_dot_segment(object_id) {
        return Err(ClientError::InvalidUrl(format!(
            "'{object_id}' is not a valid object id"
        )));
    }
    Ok(encode_path_segment(object_id))
}

fn collection_of(kind: &ObjectKind) -> Result<&'static str> {
    kind.collection().ok_or_else(|| {
        ClientError::InvalidUrl(format!("objects of type '{kind}' have no collection"))
    })
}
