use crate::{ApiClient, ApiRequest, ClientError, ClientResult, resources::id_segment};

use cg_core::{Decode, Message, NewMessage, Role, UnreadCount};

use std::collections::HashSet;

use futures::future::join_all;
use log::warn;
use serde_json::Value;

/// Messages merged from several role-scoped inboxes
#[derive(Debug, Default)]
pub struct Inbox {
    pub messages: Vec<Message>,
    /// Inboxes that could not be loaded
    pub failures: Vec<(Role, ClientError)>,
}

pub struct MessagesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MessagesApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, role: Role) -> ClientResult<Vec<Message>> {
        let payload: Value = self.client.get(&messages_path(role)?).await?;
        Ok(Message::decode_list(&payload)?)
    }

    pub async fn send(&self, role: Role, message: &NewMessage) -> ClientResult<Message> {
        let payload: Value = self.client.post(&messages_path(role)?, message).await?;
        Ok(Message::decode(&payload)?)
    }

    pub async fn mark_read(&self, role: Role, id: &str) -> ClientResult<()> {
        let path = format!("{}/{}/read", messages_path(role)?, id_segment(id)?);
        let _: Value = self.client.send(ApiRequest::patch(path)).await?;
        Ok(())
    }

    pub async fn unread_count(&self, role: Role) -> ClientResult<UnreadCount> {
        let path = format!("{}/unread-count", messages_path(role)?);
        let payload: Value = self.client.get(&path).await?;
        Ok(UnreadCount::from_payload(&payload))
    }

    /// Fetch several inboxes concurrently and merge them.
    ///
    /// Order follows `roles`; a message seen in an earlier inbox wins over a
    /// later copy with the same id. A failed inbox is reported, not fatal.
    pub async fn inbox(&self, roles: &[Role]) -> Inbox {
        let results = join_all(roles.iter().map(|role| self.list(*role))).await;

        let mut inbox = Inbox::default();
        let mut seen = HashSet::new();
        for (role, result) in roles.iter().zip(results) {
            match result {
                Ok(messages) => inbox.messages.extend(
                    messages
                        .into_iter()
                        .filter(|m| m.id.is_empty() || seen.insert(m.id.clone())),
                ),
                Err(e) => {
                    warn!("Failed to load {:?} inbox: {}", role, e);
                    inbox.failures.push((*role, e));
                }
            }
        }
        inbox
    }
}

#[track_caller]
fn messages_path(role: Role) -> ClientResult<String> {
    match role {
        Role::Student | Role::Counselor | Role::Admin => {
            let prefix = role
                .api_prefix()
                .ok_or_else(|| ClientError::request(format!("{role:?} has no message inbox")))?;
            Ok(format!("/{prefix}/messages"))
        }
        Role::ReferralUser | Role::Unknown => Err(ClientError::request(format!(
            "{role:?} accounts have no message inbox"
        ))),
    }
}
