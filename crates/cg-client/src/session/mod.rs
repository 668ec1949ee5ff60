pub(crate) mod session_store;

pub use session_store::{SESSION_STORAGE_KEY, SessionStore, SubscriptionId};
