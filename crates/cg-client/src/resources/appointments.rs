use crate::{ApiClient, ClientResult, query::ListQuery};

use cg_core::{Appointment, Decode};

use serde_json::Value;

pub struct AppointmentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AppointmentsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_for_counselor(&self, query: &ListQuery) -> ClientResult<Vec<Appointment>> {
        query.validate()?;
        let payload: Value = self
            .client
            .get_with_query("/counselor/appointments", query)
            .await?;
        Ok(Appointment::decode_list(&payload)?)
    }

    pub async fn list_for_student(&self) -> ClientResult<Vec<Appointment>> {
        let payload: Value = self.client.get("/student/appointments").await?;
        Ok(Appointment::decode_list(&payload)?)
    }
}
