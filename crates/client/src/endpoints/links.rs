//! Navigation endpoints resolving relations between objects.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::decode::{into_page, read_json, to_object};
use crate::endpoints::request::{authorized_get, send_request};
use crate::endpoints::target::ApiTarget;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{
    DirectoryObject, LinkRelation, ODataCollection, ObjectKind, PageToken, PagedResult,
};

fn endpoint_label(kind: &ObjectKind, relation: LinkRelation) -> String {
    format!(
        "{}/{{id}}/{}",
        kind.collection().unwrap_or_default(),
        relation.path_segment()
    )
}

/// Fetch the first page of objects related to a source via a
/// collection-valued relation.
pub async fn list_linked_objects(
    client: &Client,
    target: &ApiTarget,
    auth_token: &str,
    source_kind: &ObjectKind,
    source_id: &str,
    relation: LinkRelation,
    metrics: Option<&MetricsCollector>,
) -> Result<PagedResult<DirectoryObject>> {
    let url = target.link_url(source_kind, source_id, relation)?;
    let endpoint = endpoint_label(source_kind, relation);

    let builder = authorized_get(client, url, auth_token);
    let response = send_request(builder, &endpoint, "GET", target.timeout(), metrics)
        .await
        .map_err(|e| e.not_found_for(source_id))?;
    let collection: ODataCollection =
        read_json(response, &endpoint, "DirectoryObject", metrics).await?;

    into_page(collection, |value| to_object(value, &endpoint, metrics))
}

/// Fetch a continuation page of related objects.
pub async fn list_linked_objects_page(
    client: &Client,
    target: &ApiTarget,
    auth_token: &str,
    page: &PageToken,
    metrics: Option<&MetricsCollector>,
) -> Result<PagedResult<DirectoryObject>> {
    let url = target.resolve_next_link(page)?;
    let endpoint = "links/nextLink";
    debug!("Following link continuation");

    let builder = authorized_get(client, url, auth_token);
    let response = send_request(builder, endpoint, "GET", target.timeout(), metrics).await?;
    let collection: ODataCollection =
        read_json(response, endpoint, "DirectoryObject", metrics).await?;

    into_page(collection, |value| to_object(value, endpoint, metrics))
}

/// Fetch the target of a single-valued relation such as `manager`.
///
/// The API answers 404 both when the relation is unset and when the source
/// does not exist. On a 404 the source is fetched: a missing source is
/// `NotFound(source_id)`, an existing one means the relation is unset and
/// yields `Ok(None)`.
pub async fn get_single_linked_object(
    client: &Client,
    target: &ApiTarget,
    auth_token: &str,
    source_kind: &ObjectKind,
    source_id: &str,
    relation: LinkRelation,
    metrics: Option<&MetricsCollector>,
) -> Result<Option<DirectoryObject>> {
    let url = target.link_url(source_kind, source_id, relation)?;
    let endpoint = endpoint_label(source_kind, relation);

    let builder = authorized_get(client, url, auth_token);
    let response = match send_request(builder, &endpoint, "GET", target.timeout(), metrics).await {
        Ok(response) => response,
        Err(ClientError::RemoteError { status: 404, .. }) => {
            ensure_source_exists(client, target, auth_token, source_kind, source_id, metrics)
                .await?;
            debug!(relation = %relation, "Relation unset on source");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    let record: serde_json::Value =
        read_json(response, &endpoint, "DirectoryObject", metrics).await?;

    to_object(record, &endpoint, metrics).map(Some)
}

async fn ensure_source_exists(
    client: &Client,
    target: &ApiTarget,
    auth_token: &str,
    source_kind: &ObjectKind,
    source_id: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = target.object_url(source_kind, source_id)?;
    let endpoint = format!("{}/{{id}}", source_kind.collection().unwrap_or_default());

    let builder = authorized_get(client, url, auth_token);
    send_request(builder, &endpoint, "GET", target.timeout(), metrics)
        .await
        .map(drop)
        .map_err(|e| e.not_found_for(source_id))
}
