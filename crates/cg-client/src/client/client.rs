use crate::{
    ApiRequest, ClientError, ClientResult, RequestBody,
    auth::TokenResolver,
    client::{response, url::resolve_url},
    probe::{CandidateRoutes, probe},
    query::ListQuery,
};

use cg_config::ApiConfig;
use cg_core::bearer_header_value;

use std::time::Duration;

use log::debug;
use reqwest::{
    Client as ReqwestClient, Url,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

const JSON_MEDIA_TYPE: &str = "application/json";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated HTTP client for the guidance backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    auth: TokenResolver,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// Fails with a configuration error when the base URL is blank.
    #[track_caller]
    pub fn new(base_url: &str, auth: TokenResolver) -> ClientResult<Self> {
        Self::with_timeout(base_url, auth, DEFAULT_TIMEOUT)
    }

    #[track_caller]
    pub fn from_config(config: &ApiConfig, auth: TokenResolver) -> ClientResult<Self> {
        let base_url = config.require_base_url()?;
        Self::with_timeout(base_url, auth, Duration::from_secs(config.timeout_secs))
    }

    #[track_caller]
    pub fn with_timeout(base_url: &str, auth: TokenResolver, timeout: Duration) -> ClientResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::config(
                "API base URL is not configured (set CG_API_BASE_URL)",
            ));
        }

        // Session cookies ride along with every request
        let client = ReqwestClient::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url,
            auth,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth(&self) -> &TokenResolver {
        &self.auth
    }

    pub fn resolve_url(&self, path: &str) -> ClientResult<String> {
        resolve_url(&self.base_url, path)
    }

    /// Standard headers plus the bearer token, merged over `extra`.
    ///
    /// A caller-supplied `Authorization` is normalized rather than replaced;
    /// when it normalizes to nothing the stored token is used instead.
    #[track_caller]
    pub fn build_auth_headers(&self, extra: HeaderMap) -> ClientResult<HeaderMap> {
        let mut headers = extra;
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        }

        let supplied = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_header_value);
        let authorization =
            supplied.or_else(|| self.auth.resolve().map(|token| format!("Bearer {token}")));

        match authorization {
            Some(value) => {
                let value = HeaderValue::from_str(&value)
                    .map_err(|e| ClientError::request(format!("invalid bearer token: {e}")))?;
                headers.insert(AUTHORIZATION, value);
            }
            None => {
                headers.remove(AUTHORIZATION);
            }
        }

        Ok(headers)
    }

    /// Send a request and decode the 2xx body as `T`.
    ///
    /// An empty success body decodes from JSON `null`. Non-2xx responses
    /// become `ClientError::Api` with the best available message.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let mut url = Url::parse(&self.resolve_url(&request.path)?)
            .map_err(|e| ClientError::request(format!("invalid URL for {}: {e}", request.path)))?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }

        let headers = self.build_auth_headers(request.headers)?;
        let method = request.method;
        debug!("{} {}", method, url);

        let builder = self.client.request(method.clone(), url.clone()).headers(headers);
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder.body(bytes),
            RequestBody::Text(text) => builder.body(text),
        };

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = response::parse_body(&text);
        debug!("{} {} -> {}", method, url, status);

        if !status.is_success() {
            let message = response::error_message(&body, status);
            return Err(ClientError::api(status.as_u16(), message, body));
        }

        Ok(serde_json::from_value(body)?)
    }

    /// `send` returning the raw JSON payload
    pub async fn send_value(&self, request: ApiRequest) -> ClientResult<Value> {
        self.send(request).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(ApiRequest::get(path)).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> ClientResult<T> {
        self.send(ApiRequest::get(path).query(query)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(ApiRequest::post(path).json(body)?).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(ApiRequest::put(path).json(body)?).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(ApiRequest::patch(path).json(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(ApiRequest::delete(path)).await
    }

    /// GET the first candidate route that exists
    pub async fn probe_get(&self, routes: &CandidateRoutes, query: &ListQuery) -> ClientResult<Value> {
        probe(routes, |path| {
            self.send_value(ApiRequest::get(path).query(query))
        })
        .await
    }
}
