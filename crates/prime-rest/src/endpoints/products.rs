//! Product endpoints

use crate::client::PrimeClient;
use crate::endpoints::paged_get;
use crate::error::RestResult;
use crate::pagination::{Pager, PaginationParams};
use crate::types::{ListProductsResponse, Product};
use reqwest::{Method, StatusCode};
use tracing::instrument;

/// Product endpoints
pub struct ProductEndpoints<'a> {
    client: &'a PrimeClient,
}

impl<'a> ProductEndpoints<'a> {
    pub fn new(client: &'a PrimeClient) -> Self {
        Self { client }
    }

    /// List products tradable by a portfolio (one page)
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        portfolio_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<ListProductsResponse> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let path = format!("/v1/portfolios/{}/products", portfolio_id);
        self.client
            .send(Method::GET, &path, &params.to_query_string(), &[StatusCode::OK], None::<&()>)
            .await
    }

    /// List tradable products with a pager over the remaining pages
    pub async fn list_products_paged(
        &self,
        portfolio_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<Pager<'a, ListProductsResponse, Product>> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let first = self.list_products(portfolio_id, Some(&params)).await?;
        let path = format!("/v1/portfolios/{}/products", portfolio_id);
        Ok(paged_get(self.client, path, params, first, |page| {
            page.products.as_slice()
        }))
    }
}
