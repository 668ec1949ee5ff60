//! Campus guidance API client.
//!
//! [`ApiClient`] is the single request path: URL resolution, bearer token
//! discovery, error normalization. Resource wrappers, the session store,
//! route probing and polling sit on top of it. [`GuidanceClient`] wires the
//! pieces together.

pub mod auth;
pub mod client;
pub mod generation;
pub mod guidance;
pub mod polling;
pub mod probe;
pub mod query;
pub mod resources;
pub mod session;
pub mod storage;

#[cfg(test)]
mod tests;

pub use auth::TokenResolver;
pub use client::{
    ApiClient, ApiRequest, ClientError, ClientResult, GENERIC_ERROR_MESSAGE, RequestBody,
    error_message, resolve_url,
};
pub use generation::{Generation, RequestGeneration};
pub use guidance::GuidanceClient;
pub use polling::{FocusTrigger, Poller};
pub use probe::{CandidateRoutes, MANUAL_SCORE_ROUTES, STUDENT_DIRECTORY_ROUTES, probe};
pub use query::ListQuery;
pub use resources::{AdminOverview, Inbox};
pub use session::{SESSION_STORAGE_KEY, SessionStore, SubscriptionId};
pub use storage::{BrowserStorage, FileStore, KeyValueStore, MemoryStore};
