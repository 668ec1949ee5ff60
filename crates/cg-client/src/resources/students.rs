use crate::{
    ApiClient, ClientResult,
    probe::STUDENT_DIRECTORY_ROUTES,
    query::ListQuery,
};

use cg_core::{Decode, StudentSummary};

pub struct StudentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StudentsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Student directory from whichever route this deployment exposes
    pub async fn directory(&self, query: &ListQuery) -> ClientResult<Vec<StudentSummary>> {
        query.validate()?;
        let payload = self
            .client
            .probe_get(&STUDENT_DIRECTORY_ROUTES, query)
            .await?;
        Ok(StudentSummary::decode_list(&payload)?)
    }
}
