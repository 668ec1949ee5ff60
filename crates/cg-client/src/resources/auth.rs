use crate::{ApiClient, ApiRequest, ClientResult, session::SessionStore};

use cg_core::{AuthResponse, Credentials, Decode, Registration, Session, User};

use log::{info, warn};
use serde_json::Value;

pub struct AuthApi<'a> {
    client: &'a ApiClient,
    session: &'a SessionStore,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient, session: &'a SessionStore) -> Self {
        Self { client, session }
    }

    /// Log in and store the returned `{ user, token }`
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<Session> {
        let payload: Value = self.client.post("/auth/login", credentials).await?;
        let session = AuthResponse::decode(&payload)?.into_session();
        self.session.set(session.clone())?;
        info!(
            "Logged in as {}",
            session.user.as_ref().map(|u| u.email.as_str()).unwrap_or("<unknown>")
        );
        Ok(session)
    }

    /// Register; the backend logs the new account in when it returns a token
    pub async fn register(&self, registration: &Registration) -> ClientResult<Session> {
        let payload: Value = self.client.post("/auth/register", registration).await?;
        let session = AuthResponse::decode(&payload)?.into_session();
        if !session.is_empty() {
            self.session.set(session.clone())?;
        }
        Ok(session)
    }

    pub async fn me(&self) -> ClientResult<User> {
        let payload: Value = self.client.get("/auth/me").await?;
        Ok(User::decode(&payload)?)
    }

    /// Re-fetch the current user and store it next to the existing token
    pub async fn refresh_session(&self) -> ClientResult<Session> {
        let user = self.me().await?;
        let token = self.session.token();
        let session = Session::new(Some(user), token.as_deref());
        self.session.set(session.clone())?;
        Ok(session)
    }

    /// Best-effort server logout; the local session is cleared regardless
    pub async fn logout(&self) -> ClientResult<()> {
        if let Err(e) = self
            .client
            .send::<Value>(ApiRequest::post("/auth/logout"))
            .await
        {
            warn!("Server logout failed, clearing local session anyway: {}", e);
        }
        self.session.clear()
    }
}
