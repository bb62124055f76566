//! GitLab API error types.

use thiserror::Error;

use crate::entity::visibility::UnknownVisibility;
use crate::http::HttpError;

/// Errors that can occur when interacting with the GitLab API.
#[derive(Debug, Error)]
pub enum GitLabError {
    #[error("GitLab API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP request error: {0}")]
    Http(String),

    #[error("Invalid GitLab URL: {0}")]
    Url(String),

    #[error("TLS certificate error: {0}")]
    Certificate(String),

    #[error("Missing required field in API response: {0}")]
    MissingField(&'static str),

    #[error("JSON deserialization error: {0}")]
    Deserialize(String),
}

impl GitLabError {
    /// Classify an HTTP status code and response body into a typed error.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Auth(format!("{status}: {body}")),
            404 => Self::NotFound(body.to_string()),
            _ => Self::Api(format!("{status}: {body}")),
        }
    }
}

impl From<HttpError> for GitLabError {
    fn from(err: HttpError) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for GitLabError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}

impl From<UnknownVisibility> for GitLabError {
    fn from(err: UnknownVisibility) -> Self {
        Self::Deserialize(err.to_string())
    }
}
