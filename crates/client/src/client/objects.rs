//! Object listing and lookup methods for [`DirectoryClient`].

use crate::auth::{AccessToken, bearer};
use crate::client::DirectoryClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DirectoryResource, ListFilter, PageToken, PagedResult};

impl DirectoryClient {
    /// List the first page of objects of type `T`.
    ///
    /// Without a filter, every object of `T` visible to the caller is in scope.
    /// The filter expression is evaluated by the API.
    pub async fn list_objects<T: DirectoryResource>(
        &self,
        token: Option<&AccessToken>,
        filter: Option<&ListFilter>,
    ) -> Result<PagedResult<T>> {
        let auth_token = bearer(token)?;
        endpoints::list_objects::<T>(
            &self.http,
            &self.target,
            auth_token,
            filter,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Fetch the page a previous [`PagedResult::next_page`] points at.
    pub async fn next_page<T: DirectoryResource>(
        &self,
        token: Option<&AccessToken>,
        page: &PageToken,
    ) -> Result<PagedResult<T>> {
        let auth_token = bearer(token)?;
        endpoints::list_objects_page::<T>(
            &self.http,
            &self.target,
            auth_token,
            page,
            self.metrics.as_ref(),
        )
        .await
    }

    /// List every object of type `T`, following all continuations.
    pub async fn list_all_objects<T: DirectoryResource>(
        &self,
        token: Option<&AccessToken>,
        filter: Option<&ListFilter>,
    ) -> Result<Vec<T>> {
        let auth_token = bearer(token)?;
        let first = endpoints::list_objects::<T>(
            &self.http,
            &self.target,
            auth_token,
            filter,
            self.metrics.as_ref(),
        )
        .await?;

        let endpoint = T::KIND.collection().unwrap_or_default();
        self.drain_pages(first, endpoint, |page| async move {
            endpoints::list_objects_page::<T>(
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

    /// Fetch exactly one object of type `T` by identifier.
    ///
    /// Fails with `NotFound` when the identifier does not resolve.
    pub async fn get_object<T: DirectoryResource>(
        &self,
        token: Option<&AccessToken>,
        object_id: &str,
    ) -> Result<T> {
        let auth_token = bearer(token)?;
        endpoints::get_object::<T>(
            &self.http,
            &self.target,
            auth_token,
            object_id,
            self.metrics.as_ref(),
        )
        .await
    }
}
