//! API endpoint implementations

pub mod activities;
pub mod orders;
pub mod portfolios;
pub mod products;
pub mod transactions;

pub use activities::ActivityEndpoints;
pub use orders::OrderEndpoints;
pub use portfolios::PortfolioEndpoints;
pub use products::ProductEndpoints;
pub use transactions::TransactionEndpoints;

use crate::client::PrimeClient;
use crate::error::RestResult;
use crate::pagination::{Paginated, Pager, PaginationParams};
use futures::future::BoxFuture;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

/// Wrap an already-fetched first page in a pager
///
/// The fetch function re-issues the same GET with only the cursor
/// replaced; the original params are copied, never mutated.
pub(crate) fn paged_get<'a, T, I>(
    client: &'a PrimeClient,
    path: String,
    params: PaginationParams,
    first_page: T,
    extract: fn(&T) -> &[I],
) -> Pager<'a, T, I>
where
    T: Paginated + DeserializeOwned + Send + 'a,
    I: Clone,
{
    let config = *client.pagination_config();
    let fetch = move |cursor: String| -> BoxFuture<'a, RestResult<T>> {
        let query = params.with_cursor(cursor).to_query_string();
        let path = path.clone();
        Box::pin(async move {
            client
                .send(Method::GET, &path, &query, &[StatusCode::OK], None::<&()>)
                .await
        })
    };
    Pager::new(first_page, extract, config, fetch)
}
