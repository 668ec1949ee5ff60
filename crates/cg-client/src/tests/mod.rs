mod generation;
mod headers;
mod probe;
mod query;
mod token_resolver;

use crate::{ApiClient, SessionStore, TokenResolver, storage::BrowserStorage};

/// Client over in-memory storage; never sends anything in unit tests
pub(crate) fn client_with(storage: BrowserStorage) -> (ApiClient, SessionStore) {
    let session = SessionStore::new(storage.persistent.clone());
    let resolver = TokenResolver::new(session.clone(), storage);
    let client = ApiClient::new("http://localhost:8000", resolver).expect("valid base URL");
    (client, session)
}
