use crate::{
    ApiClient, ClientResult,
    probe::MANUAL_SCORE_ROUTES,
    query::ListQuery,
};

use cg_core::{Decode, ManualScore, NewManualScore};

use serde_json::Value;

pub struct ManualScoresApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ManualScoresApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Vec<ManualScore>> {
        query.validate()?;
        let payload = self.client.probe_get(&MANUAL_SCORE_ROUTES, query).await?;
        Ok(ManualScore::decode_list(&payload)?)
    }

    pub async fn save(&self, score: &NewManualScore) -> ClientResult<ManualScore> {
        let payload: Value = self.client.post("/counselor/manual-scores", score).await?;
        Ok(ManualScore::decode(&payload)?)
    }
}
