use crate::{
    ApiClient, ClientResult,
    query::ListQuery,
    resources::{decode_optional, id_segment},
};

use cg_core::{Decode, IntakeRequest, NewIntakeRequest, StatusUpdate};

use serde_json::Value;

pub struct IntakeApi<'a> {
    client: &'a ApiClient,
}

impl<'a> IntakeApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Student submits a counseling request
    pub async fn submit(&self, request: &NewIntakeRequest) -> ClientResult<IntakeRequest> {
        let payload: Value = self.client.post("/student/intake", request).await?;
        Ok(IntakeRequest::decode(&payload)?)
    }

    pub async fn list_mine(&self) -> ClientResult<Vec<IntakeRequest>> {
        let payload: Value = self.client.get("/student/intake").await?;
        Ok(IntakeRequest::decode_list(&payload)?)
    }

    /// Counselor queue
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Vec<IntakeRequest>> {
        query.validate()?;
        let payload: Value = self.client.get_with_query("/counselor/intake", query).await?;
        Ok(IntakeRequest::decode_list(&payload)?)
    }

    pub async fn update_status(
        &self,
        id: &str,
        update: &StatusUpdate,
    ) -> ClientResult<Option<IntakeRequest>> {
        let path = format!("/counselor/intake/{}", id_segment(id)?);
        let payload: Value = self.client.patch(&path, update).await?;
        decode_optional(&payload)
    }
}
