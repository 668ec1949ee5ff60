use crate::{
    ApiClient, ClientResult,
    query::ListQuery,
    resources::{decode_optional, id_segment},
};

use cg_core::{Decode, NewReferral, Referral, StatusUpdate};

use serde_json::Value;

pub struct ReferralsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReferralsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Faculty files a referral
    pub async fn create(&self, referral: &NewReferral) -> ClientResult<Referral> {
        let payload: Value = self.client.post("/referral-user/referrals", referral).await?;
        Ok(Referral::decode(&payload)?)
    }

    pub async fn list_mine(&self) -> ClientResult<Vec<Referral>> {
        let payload: Value = self.client.get("/referral-user/referrals").await?;
        Ok(Referral::decode_list(&payload)?)
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Vec<Referral>> {
        query.validate()?;
        let payload: Value = self
            .client
            .get_with_query("/counselor/referrals", query)
            .await?;
        Ok(Referral::decode_list(&payload)?)
    }

    pub async fn update_status(
        &self,
        id: &str,
        update: &StatusUpdate,
    ) -> ClientResult<Option<Referral>> {
        let path = format!("/counselor/referrals/{}", id_segment(id)?);
        let payload: Value = self.client.patch(&path, update).await?;
        decode_optional(&payload)
    }
}
