use std::panic::Location;

use cg_config::ConfigError;
use cg_core::CoreError;
use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the API client.
///
/// Non-2xx responses always arrive as `Api`, carrying the numeric status and
/// the parsed body (or the raw text as a JSON string). Network failures stay
/// `Transport` and are never folded into `Api`.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid request: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        data: Value,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Settings(#[from] ConfigError),
}

impl ClientError {
    /// Missing or unusable configuration, raised before any request is sent
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ClientError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn request<S: Into<String>>(message: S) -> Self {
        ClientError::Request {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api<S: Into<String>>(status: u16, message: S, data: Value) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            data,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        ClientError::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// HTTP status of an `Api` error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of an `Api` error (parsed JSON, or raw text as a string)
    pub fn data(&self) -> Option<&Value> {
        match self {
            ClientError::Api { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Message suitable for display, without location noise
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Api { message, .. }
            | ClientError::Config { message, .. }
            | ClientError::Request { message, .. }
            | ClientError::Transport { message, .. }
            | ClientError::Json { message, .. }
            | ClientError::Storage { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// 404 or 405: the route does not exist on this deployment
    pub fn is_route_miss(&self) -> bool {
        matches!(self.status(), Some(404 | 405))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
