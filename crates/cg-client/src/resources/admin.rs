use crate::{
    ApiClient, ClientError, ClientResult,
    query::ListQuery,
    resources::{AnalyticsApi, MessagesApi},
};

use cg_core::{AnalyticsSummary, Decode, Message, Role, User};

use serde_json::{Value, json};

pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

/// Admin dashboard data. Each source settles on its own; one failing does
/// not hide the others.
#[derive(Debug)]
pub struct AdminOverview {
    pub users: ClientResult<Vec<User>>,
    pub messages: ClientResult<Vec<Message>>,
    pub analytics: ClientResult<AnalyticsSummary>,
}

impl AdminOverview {
    /// Names of the sources that failed, with their errors
    pub fn failures(&self) -> Vec<(&'static str, &ClientError)> {
        [
            ("users", self.users.as_ref().err()),
            ("messages", self.messages.as_ref().err()),
            ("analytics", self.analytics.as_ref().err()),
        ]
        .into_iter()
        .filter_map(|(name, err)| err.map(|e| (name, e)))
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.failures().is_empty()
    }

    /// JSON report with `{ "ok": ... }` or `{ "error": ..., "status": ... }` per source
    pub fn to_report(&self) -> Value {
        json!({
            "users": settled(&self.users),
            "messages": settled(&self.messages),
            "analytics": settled(&self.analytics),
        })
    }
}

fn settled<T: serde::Serialize>(result: &ClientResult<T>) -> Value {
    match result {
        Ok(value) => json!({ "ok": value }),
        Err(e) => json!({ "error": e.display_message(), "status": e.status() }),
    }
}

impl<'a> AdminApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn users(&self, query: &ListQuery) -> ClientResult<Vec<User>> {
        query.validate()?;
        let payload: Value = self.client.get_with_query("/admin/users", query).await?;
        Ok(User::decode_list(&payload)?)
    }

    /// Users, admin messages and analytics fetched concurrently
    pub async fn overview(&self, range: &ListQuery) -> AdminOverview {
        let messages = MessagesApi::new(self.client);
        let analytics = AnalyticsApi::new(self.client);
        let all_users = ListQuery::default();

        let (users, messages, analytics) = tokio::join!(
            self.users(&all_users),
            messages.list(Role::Admin),
            analytics.summary(range),
        );

        AdminOverview {
            users,
            messages,
            analytics,
        }
    }
}
