use thiserror::Error;

use crate::config::{EMPTY_SELECTION_MESSAGE, REQUEST_FAILED_MESSAGE};

/// Failures talking to the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{}", REQUEST_FAILED_MESSAGE)]
    Status(u16),
    #[error("{0}")]
    Transport(String),
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_timeout() {
            ApiError::Transport("Request timed out".to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{}", EMPTY_SELECTION_MESSAGE)]
    EmptySelection,
    #[error("A request is already in progress")]
    Busy,
    #[error(transparent)]
    Request(#[from] ApiError),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
