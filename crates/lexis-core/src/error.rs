//! Errors that can occur when talking to the lexis server

use std::fmt::Debug;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from performing network requests.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    ReqwestMiddleware(#[from] reqwest_middleware::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    #[error("Received error message from server: [{}] {}", .status, .message)]
    ResponseContent { status: StatusCode, message: String },
}

impl ApiError {
    /// The HTTP status of the response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::ResponseContent { status, .. } => Some(*status),
            Self::Reqwest(e) => e.status(),
            Self::ReqwestMiddleware(reqwest_middleware::Error::Reqwest(e)) => e.status(),
            Self::ReqwestMiddleware(reqwest_middleware::Error::Middleware(_)) => None,
            Self::Serde(_) => None,
        }
    }
}
