//! Order placement, lookup, and fill endpoints

use crate::client::PrimeClient;
use crate::endpoints::paged_get;
use crate::error::RestResult;
use crate::pagination::{Pager, PaginationParams};
use crate::types::{
    CancelOrderResponse, CreateOrderRequest, CreateOrderResponse, Fill, GetOrderResponse,
    ListOpenOrdersResponse, ListOrderFillsResponse, Order,
};
use reqwest::{Method, StatusCode};
use tracing::instrument;

/// Order endpoints
pub struct OrderEndpoints<'a> {
    client: &'a PrimeClient,
}

impl<'a> OrderEndpoints<'a> {
    pub fn new(client: &'a PrimeClient) -> Self {
        Self { client }
    }

    /// Place a new order
    #[instrument(skip(self, order), fields(product_id = %order.product_id))]
    pub async fn create_order(
        &self,
        portfolio_id: &str,
        order: &CreateOrderRequest,
    ) -> RestResult<CreateOrderResponse> {
        let path = format!("/v1/portfolios/{}/order", portfolio_id);
        self.client
            .send(Method::POST, &path, "", &[StatusCode::OK], Some(order))
            .await
    }

    /// Get a single order
    #[instrument(skip(self))]
    pub async fn get_order(&self, portfolio_id: &str, order_id: &str) -> RestResult<GetOrderResponse> {
        let path = format!("/v1/portfolios/{}/orders/{}", portfolio_id, order_id);
        self.client
            .send(Method::GET, &path, "", &[StatusCode::OK], None::<&()>)
            .await
    }

    /// Request cancellation of an open order
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        portfolio_id: &str,
        order_id: &str,
    ) -> RestResult<CancelOrderResponse> {
        let path = format!("/v1/portfolios/{}/orders/{}/cancel", portfolio_id, order_id);
        self.client
            .send(Method::POST, &path, "", &[StatusCode::OK], None::<&()>)
            .await
    }

    /// List open orders in a portfolio (one page)
    #[instrument(skip(self))]
    pub async fn list_open_orders(
        &self,
        portfolio_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<ListOpenOrdersResponse> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let path = format!("/v1/portfolios/{}/open_orders", portfolio_id);
        self.client
            .send(Method::GET, &path, &params.to_query_string(), &[StatusCode::OK], None::<&()>)
            .await
    }

    /// List open orders with a pager over the remaining pages
    pub async fn list_open_orders_paged(
        &self,
        portfolio_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<Pager<'a, ListOpenOrdersResponse, Order>> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let first = self.list_open_orders(portfolio_id, Some(&params)).await?;
        let path = format!("/v1/portfolios/{}/open_orders", portfolio_id);
        Ok(paged_get(self.client, path, params, first, |page| {
            page.orders.as_slice()
        }))
    }

    /// List the fills of an order (one page)
    #[instrument(skip(self))]
    pub async fn list_order_fills(
        &self,
        portfolio_id: &str,
        order_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<ListOrderFillsResponse> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let path = format!("/v1/portfolios/{}/orders/{}/fills", portfolio_id, order_id);
        self.client
            .send(Method::GET, &path, &params.to_query_string(), &[StatusCode::OK], None::<&()>)
            .await
    }

    /// List the fills of an order with a pager over the remaining pages
    pub async fn list_order_fills_paged(
        &self,
        portfolio_id: &str,
        order_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<Pager<'a, ListOrderFillsResponse, Fill>> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let first = self
            .list_order_fills(portfolio_id, order_id, Some(&params))
            .await?;
        let path = format!("/v1/portfolios/{}/orders/{}/fills", portfolio_id, order_id);
        Ok(paged_get(self.client, path, params, first, |page| {
            page.fills.as_slice()
        }))
    }
}
