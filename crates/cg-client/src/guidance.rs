use crate::{
    ApiClient, ClientResult,
    auth::TokenResolver,
    resources::{
        AdminApi, AnalyticsApi, AppointmentsApi, AuthApi, IntakeApi, ManualScoresApi, MessagesApi,
        ReferralsApi, StudentsApi,
    },
    session::SessionStore,
    storage::BrowserStorage,
};

use cg_config::{ApiConfig, Config};

use std::time::Duration;

use log::debug;

/// Client, session and storage wired together
#[derive(Debug, Clone)]
pub struct GuidanceClient {
    api: ApiClient,
    session: SessionStore,
    storage: BrowserStorage,
}

impl GuidanceClient {
    /// In-memory storage; nothing outlives the process
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_storage(base_url, BrowserStorage::in_memory())
    }

    pub fn with_storage(base_url: &str, storage: BrowserStorage) -> ClientResult<Self> {
        let api = ApiConfig {
            base_url: Some(base_url.to_string()),
            ..ApiConfig::default()
        };
        Self::assemble(&api, storage)
    }

    /// File-backed persistent storage under the config directory
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        // Fail on a missing base URL before touching the filesystem
        config.api.require_base_url()?;
        let path = config.storage_path()?;
        debug!("Using storage file {}", path.display());
        Self::assemble(&config.api, BrowserStorage::with_file(&path)?)
    }

    fn assemble(api: &ApiConfig, storage: BrowserStorage) -> ClientResult<Self> {
        let session = SessionStore::new(storage.persistent.clone());
        let resolver = TokenResolver::new(session.clone(), storage.clone());
        let api = ApiClient::with_timeout(
            api.require_base_url()?,
            resolver,
            Duration::from_secs(api.timeout_secs),
        )?;

        Ok(Self {
            api,
            session,
            storage,
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn storage(&self) -> &BrowserStorage {
        &self.storage
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.api, &self.session)
    }

    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi::new(&self.api)
    }

    pub fn intake(&self) -> IntakeApi<'_> {
        IntakeApi::new(&self.api)
    }

    pub fn referrals(&self) -> ReferralsApi<'_> {
        ReferralsApi::new(&self.api)
    }

    pub fn appointments(&self) -> AppointmentsApi<'_> {
        AppointmentsApi::new(&self.api)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(&self.api)
    }

    pub fn manual_scores(&self) -> ManualScoresApi<'_> {
        ManualScoresApi::new(&self.api)
    }

    pub fn students(&self) -> StudentsApi<'_> {
        StudentsApi::new(&self.api)
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(&self.api)
    }
}
