//! Relation traversal methods for [`DirectoryClient`].

use crate::auth::{AccessToken, bearer};
use crate::client::DirectoryClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{DirectoryObject, DirectoryResource, LinkRelation, narrow_all};

impl DirectoryClient {
    /// Every object related to `source` via `relation`, across all pages.
    ///
    /// # Errors
    ///
    /// `UnsupportedRelation` when `relation` is not defined for the source's
    /// kind; no request is sent in that case. If any page fails, the pages
    /// already fetched are discarded and that error is returned.
    pub async fn get_linked_objects(
        &self,
        token: Option<&AccessToken>,
        source: &DirectoryObject,
        relation: LinkRelation,
    ) -> Result<Vec<DirectoryObject>> {
        let auth_token = bearer(token)?;
        let kind = source.kind();
        if !relation.supports(&kind) {
            return Err(ClientError::UnsupportedRelation {
                relation,
                kind: kind.to_string(),
            });
        }

        if relation.is_single_valued() {
            let linked = endpoints::get_single_linked_object(
                &self.http,
                &self.target,
                auth_token,
                &kind,
                source.object_id(),
                relation,
                self.metrics.as_ref(),
            )
            .await?;
            return Ok(linked.into_iter().collect());
        }

        let first = endpoints::list_linked_objects(
            &self.http,
            &self.target,
            auth_token,
            &kind,
            source.object_id(),
            relation,
            self.metrics.as_ref(),
        )
        .await?;

        self.drain_pages(first, relation.path_segment(), |page| async move {
            endpoints::list_linked_objects_page(
                &self.http,
                &self.target,
                auth_token,
                &page,
                self.metrics.as_ref(),
            )
            .await
        })
        .await
    }

    /// Related objects narrowed to `T`, in the order the API listed them.
    ///
    /// Objects of other kinds are dropped; an empty relation yields an empty
    /// vector.
    pub async fn get_linked<T: DirectoryResource>(
        &self,
        token: Option<&AccessToken>,
        source: &DirectoryObject,
        relation: LinkRelation,
    ) -> Result<Vec<T>> {
        let objects = self.get_linked_objects(token, source, relation).await?;
        Ok(narrow_all(objects))
    }
}
