use crate::{ApiClient, ClientResult, query::ListQuery};

use cg_core::{AnalyticsSummary, Decode};

use serde_json::Value;

pub struct AnalyticsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AnalyticsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Admin dashboard counters; only the date range of `range` is meaningful
    pub async fn summary(&self, range: &ListQuery) -> ClientResult<AnalyticsSummary> {
        range.validate()?;
        let query = ListQuery::new().date_range(range.start_date, range.end_date);
        let payload: Value = self.client.get_with_query("/admin/analytics", &query).await?;
        Ok(AnalyticsSummary::decode(&payload)?)
    }
}
