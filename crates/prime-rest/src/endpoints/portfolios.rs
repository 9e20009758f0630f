//! Portfolio endpoints

use crate::client::PrimeClient;
use crate::error::RestResult;
use crate::pagination::append_query_param;
use crate::types::{GetPortfolioResponse, ListBalancesResponse, ListPortfoliosResponse};
use reqwest::{Method, StatusCode};
use tracing::instrument;

/// Portfolio endpoints
pub struct PortfolioEndpoints<'a> {
    client: &'a PrimeClient,
}

impl<'a> PortfolioEndpoints<'a> {
    pub fn new(client: &'a PrimeClient) -> Self {
        Self { client }
    }

    /// List all portfolios the credentials can access
    #[instrument(skip(self))]
    pub async fn list_portfolios(&self) -> RestResult<ListPortfoliosResponse> {
        self.client
            .send(Method::GET, "/v1/portfolios", "", &[StatusCode::OK], None::<&()>)
            .await
    }

    /// Get a single portfolio
    #[instrument(skip(self))]
    pub async fn get_portfolio(&self, portfolio_id: &str) -> RestResult<GetPortfolioResponse> {
        let path = format!("/v1/portfolios/{}", portfolio_id);
        self.client
            .send(Method::GET, &path, "", &[StatusCode::OK], None::<&()>)
            .await
    }

    /// List asset balances within a portfolio
    ///
    /// # Arguments
    /// * `symbols` - Optional filter to specific assets (e.g., ["BTC", "ETH"])
    #[instrument(skip(self))]
    pub async fn list_balances(
        &self,
        portfolio_id: &str,
        symbols: Option<&[&str]>,
    ) -> RestResult<ListBalancesResponse> {
        let path = format!("/v1/portfolios/{}/balances", portfolio_id);
        let mut query = String::new();
        if let Some(symbols) = symbols {
            append_query_param(&mut query, "symbols", &symbols.join(","));
        }
        self.client
            .send(Method::GET, &path, &query, &[StatusCode::OK], None::<&()>)
            .await
    }
}
