//! Mapping response bodies onto typed results.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{DirectoryObject, DirectoryResource, ODataCollection, PageToken, PagedResult};

/// Read the body and deserialize it as `T`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
    model_type: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, model_type);
        }
        ClientError::Deserialization(format!("{model_type} response: {e}"))
    })
}

/// Map one raw record onto the sum type.
pub(crate) fn to_object(
    value: Value,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<DirectoryObject> {
    DirectoryObject::from_value(value).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, "DirectoryObject");
        }
        ClientError::Deserialization(e)
    })
}

/// Map one raw record onto `T`, rejecting records of another kind.
pub(crate) fn to_resource<T: DirectoryResource>(
    value: Value,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let object = to_object(value, endpoint, metrics)?;
    let kind = object.kind();
    T::from_object(object).ok_or_else(|| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, T::KIND.as_str());
        }
        ClientError::Deserialization(format!(
            "expected a {} record but received {}",
            T::KIND,
            kind
        ))
    })
}

/// Convert a collection envelope into a page, mapping each record with `convert`.
///
/// The first record that fails to map fails the whole page.
pub(crate) fn into_page<T>(
    collection: ODataCollection,
    mut convert: impl FnMut(Value) -> Result<T>,
) -> Result<PagedResult<T>> {
    let items = collection
        .value
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            convert(value).map_err(|e| match e {
                ClientError::Deserialization(msg) => {
                    ClientError::Deserialization(format!("record {index}: {msg}"))
                }
                other => other,
            })
        })
        .collect::<Result<Vec<T>>>()?;

    let next_page = collection
        .next_link
        .filter(|link| !link.trim().is_empty())
        .map(PageToken::new);

    Ok(PagedResult { items, next_page })
}
