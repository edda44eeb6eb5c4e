//! CLI command implementations.

pub mod config;
pub mod roles;
pub mod users;

use anyhow::{Context, Result};
use clap::Args;
use directory_client::{
    AccessToken, DirectoryClient, DirectoryResource, ListFilter, MetricsCollector, PageToken,
    PagedResult,
};
use directory_config::Config;
use directory_config::constants::MAX_PAGE_SIZE;
use tracing::info;

use crate::cancellation::CancellationToken;

/// Build a client from loaded configuration.
///
/// `metrics` is disabled unless a metrics exporter was installed.
pub fn build_client_from_config(
    config: &Config,
    metrics: &MetricsCollector,
) -> Result<DirectoryClient> {
    DirectoryClient::builder()
        .from_config(&config.connection)
        .metrics(metrics.clone())
        .build()
        .context("Failed to build directory client")
}

/// The configured bearer token, if any. Blank tokens count as absent.
pub fn access_token(config: &Config) -> Option<AccessToken> {
    config.access_token.as_ref().and_then(AccessToken::from_secret)
}

/// Listing options shared by `roles list` and `users list`.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// OData $filter expression, evaluated by the API
    #[arg(short, long, conflicts_with = "page_token")]
    pub filter: Option<String>,

    /// Page size ($top)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64))]
    pub top: Option<u32>,

    /// Follow every continuation and print the complete list
    #[arg(long, conflicts_with = "page_token")]
    pub all: bool,

    /// Continue a previous listing from its continuation token
    #[arg(long, value_name = "TOKEN")]
    pub page_token: Option<String>,
}

impl ListArgs {
    fn list_filter(&self) -> Option<ListFilter> {
        if self.filter.is_none() && self.top.is_none() {
            return None;
        }
        let mut filter = ListFilter::new();
        if let Some(expression) = &self.filter {
            filter = filter.filter(expression.clone());
        }
        if let Some(top) = self.top {
            filter = filter.top(top);
        }
        Some(filter)
    }
}

/// Run a listing for `T` according to `args`.
///
/// Returns the items and, for a single page, the continuation token.
pub async fn list_with_args<T: DirectoryResource>(
    client: &DirectoryClient,
    token: Option<&AccessToken>,
    args: &ListArgs,
    cancel: &CancellationToken,
) -> Result<(Vec<T>, Option<PageToken>)> {
    let filter = args.list_filter();

    if args.all {
        info!(kind = %T::KIND, "Listing every page");
        let items = cancellable!(client.list_all_objects::<T>(token, filter.as_ref()), cancel)?;
        return Ok((items, None));
    }

    let page: PagedResult<T> = match &args.page_token {
        Some(raw) => {
            info!(kind = %T::KIND, "Continuing listing");
            let page_token = PageToken::new(raw.clone());
            cancellable!(client.next_page::<T>(token, &page_token), cancel)?
        }
        None => {
            info!(kind = %T::KIND, "Listing first page");
            cancellable!(client.list_objects::<T>(token, filter.as_ref()), cancel)?
        }
    };

    Ok((page.items, page.next_page))
}

/// Tell the user how to fetch the next page. Goes to stderr so stdout stays parseable.
pub fn print_continuation_hint(next_page: Option<&PageToken>) {
    if let Some(page) = next_page {
        eprintln!(
            "More results available. Continue with --page-token '{}' or list everything with --all.",
            page
        );
    }
}
