//! Custody transaction endpoints

use crate::client::PrimeClient;
use crate::endpoints::paged_get;
use crate::error::RestResult;
use crate::pagination::{Pager, PaginationParams};
use crate::types::{GetTransactionResponse, ListTransactionsResponse, Transaction};
use reqwest::{Method, StatusCode};
use tracing::instrument;

/// Transaction endpoints
pub struct TransactionEndpoints<'a> {
    client: &'a PrimeClient,
}

impl<'a> TransactionEndpoints<'a> {
    pub fn new(client: &'a PrimeClient) -> Self {
        Self { client }
    }

    /// Get a single transaction
    #[instrument(skip(self))]
    pub async fn get_transaction(
        &self,
        portfolio_id: &str,
        transaction_id: &str,
    ) -> RestResult<GetTransactionResponse> {
        let path = format!("/v1/portfolios/{}/transactions/{}", portfolio_id, transaction_id);
        self.client
            .send(Method::GET, &path, "", &[StatusCode::OK], None::<&()>)
            .await
    }

    /// List the transactions of a wallet (one page)
    #[instrument(skip(self))]
    pub async fn list_wallet_transactions(
        &self,
        portfolio_id: &str,
        wallet_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<ListTransactionsResponse> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let path = format!(
            "/v1/portfolios/{}/wallets/{}/transactions",
            portfolio_id, wallet_id
        );
        self.client
            .send(Method::GET, &path, &params.to_query_string(), &[StatusCode::OK], None::<&()>)
            .await
    }

    /// List wallet transactions with a pager over the remaining pages
    pub async fn list_wallet_transactions_paged(
        &self,
        portfolio_id: &str,
        wallet_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<Pager<'a, ListTransactionsResponse, Transaction>> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let first = self
            .list_wallet_transactions(portfolio_id, wallet_id, Some(&params))
            .await?;
        let path = format!(
            "/v1/portfolios/{}/wallets/{}/transactions",
            portfolio_id, wallet_id
        );
        Ok(paged_get(self.client, path, params, first, |page| {
            page.transactions.as_slice()
        }))
    }
}
