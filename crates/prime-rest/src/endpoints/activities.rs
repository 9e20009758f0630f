//! Audit-trail activity endpoints

use crate::client::PrimeClient;
use crate::endpoints::paged_get;
use crate::error::RestResult;
use crate::pagination::{Pager, PaginationParams};
use crate::types::{Activity, GetActivityResponse, ListActivitiesResponse};
use reqwest::{Method, StatusCode};
use tracing::instrument;

/// Activity endpoints
pub struct ActivityEndpoints<'a> {
    client: &'a PrimeClient,
}

impl<'a> ActivityEndpoints<'a> {
    pub fn new(client: &'a PrimeClient) -> Self {
        Self { client }
    }

    /// Get a single activity entry
    #[instrument(skip(self))]
    pub async fn get_activity(
        &self,
        portfolio_id: &str,
        activity_id: &str,
    ) -> RestResult<GetActivityResponse> {
        let path = format!("/v1/portfolios/{}/activities/{}", portfolio_id, activity_id);
        self.client
            .send(Method::GET, &path, "", &[StatusCode::OK], None::<&()>)
            .await
    }

    /// List portfolio activities (one page)
    #[instrument(skip(self))]
    pub async fn list_activities(
        &self,
        portfolio_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<ListActivitiesResponse> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let path = format!("/v1/portfolios/{}/activities", portfolio_id);
        self.client
            .send(Method::GET, &path, &params.to_query_string(), &[StatusCode::OK], None::<&()>)
            .await
    }

    /// List portfolio activities with a pager over the remaining pages
    pub async fn list_activities_paged(
        &self,
        portfolio_id: &str,
        params: Option<&PaginationParams>,
    ) -> RestResult<Pager<'a, ListActivitiesResponse, Activity>> {
        let params = PaginationParams::or_default_limit(params, self.client.pagination_config());
        let first = self.list_activities(portfolio_id, Some(&params)).await?;
        let path = format!("/v1/portfolios/{}/activities", portfolio_id);
        Ok(paged_get(self.client, path, params, first, |page| {
            page.activities.as_slice()
        }))
    }
}
