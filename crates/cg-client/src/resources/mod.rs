//! Thin per-area wrappers over [`ApiClient`](crate::ApiClient).
//!
//! Each borrows the shared client, knows its paths, and hands back
//! canonical `cg-core` types.

pub(crate) mod admin;
pub(crate) mod analytics;
pub(crate) mod appointments;
pub(crate) mod auth;
pub(crate) mod intake;
pub(crate) mod manual_scores;
pub(crate) mod messages;
pub(crate) mod referrals;
pub(crate) mod students;

pub use admin::{AdminApi, AdminOverview};
pub use analytics::AnalyticsApi;
pub use appointments::AppointmentsApi;
pub use auth::AuthApi;
pub use intake::IntakeApi;
pub use manual_scores::ManualScoresApi;
pub use messages::{Inbox, MessagesApi};
pub use referrals::ReferralsApi;
pub use students::StudentsApi;

use crate::ClientResult;

use cg_core::{CoreError, Decode};

use serde_json::Value;

/// Validate an id before splicing it into a path
#[track_caller]
pub(crate) fn id_segment(id: &str) -> ClientResult<&str> {
    let id = id.trim();
    if id.is_empty() || id.contains('/') {
        return Err(CoreError::validation("id", format!("invalid resource id '{id}'")).into());
    }
    Ok(id)
}

/// Decode an update response; servers may answer with an empty body
pub(crate) fn decode_optional<T: Decode>(payload: &Value) -> ClientResult<Option<T>> {
    if payload.is_null() {
        return Ok(None);
    }
    Ok(Some(T::decode(payload)?))
}
