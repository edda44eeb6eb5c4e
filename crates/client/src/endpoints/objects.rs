//! Collection and by-id endpoints for roles, users and groups.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::decode::{into_page, read_json, to_resource};
use crate::endpoints::request::{authorized_get, send_request};
use crate::endpoints::target::ApiTarget;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{DirectoryResource, ListFilter, ODataCollection, PageToken, PagedResult};

/// List the first page of objects of type `T`.
pub async fn list_objects<T: DirectoryResource>(
    client: &Client,
    target: &ApiTarget,
    auth_token: &str,
    filter: Option<&ListFilter>,
    metrics: Option<&MetricsCollector>,
) -> Result<PagedResult<T>> {
    let url = target.collection_url(&T::KIND)?;
    let endpoint = T::KIND.collection().unwrap_or_default();

    let mut builder = authorized_get(client, url, auth_token);
    if let Some(filter) = filter {
        builder = builder.query(&filter.query_pairs());
    }

    let response = send_request(builder, endpoint, "GET", target.timeout(), metrics).await?;
    let collection: ODataCollection =
        read_json(response, endpoint, T::KIND.as_str(), metrics).await?;

    into_page(collection, |value| to_resource::<T>(value, endpoint, metrics))
}

/// Fetch the page of objects of type `T` that `page` points at.
pub async fn list_objects_page<T: DirectoryResource>(
    client: &Client,
    target: &ApiTarget,
    auth_token: &str,
    page: &PageToken,
    metrics: Option<&MetricsCollector>,
) -> Result<PagedResult<T>> {
    let url = target.resolve_next_link(page)?;
    let endpoint = format!("{}/nextLink", T::KIND.collection().unwrap_or_default());
    debug!(kind = %T::KIND, "Following collection continuation");

    let builder = authorized_get(client, url, auth_token);
    let response = send_request(builder, &endpoint, "GET", target.timeout(), metrics).await?;
    let collection: ODataCollection =
        read_json(response, &endpoint, T::KIND.as_str(), metrics).await?;

    into_page(collection, |value| to_resource::<T>(value, &endpoint, metrics))
}

/// Fetch exactly one object of type `T`.
///
/// A 404 from the API is reported as `NotFound` carrying `object_id`.
pub async fn get_object<T: DirectoryResource>(
    client: &Client,
    target: &ApiTarget,
    auth_token: &str,
    object_id: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let url = target.object_url(&T::KIND, object_id)?;
    let endpoint = format!("{}/{{id}}", T::KIND.collection().unwrap_or_default());

    let builder = authorized_get(client, url, auth_token);
    let response = send_request(builder, &endpoint, "GET", target.timeout(), metrics)
        .await
        .map_err(|e| e.not_found_for(object_id))?;
    let record: serde_json::Value =
        read_json(response, &endpoint, T::KIND.as_str(), metrics).await?;

    to_resource::<T>(record, &endpoint, metrics)
}
