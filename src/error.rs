use thiserror::Error;
use tracing::error;

#[derive(Debug, Error, PartialEq)]
pub enum ConciergeError {
    #[error("Could not find resource")]
    NotFound,

    #[error("User is not authorized")]
    Unauthorized,

    #[error("Not authorized to request the specified resource")]
    Forbidden,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Provided data was malformed")]
    MalformedData,

    #[error("Failed to reach the API: {0}")]
    Network(String),

    #[error("Failed to read or write local storage: {0}")]
    Storage(String),

    #[error("Internal Server Error")]
    ServerError(String),

    #[error("Unexpected error occurred")]
    UnexpectedError,
}

impl From<serde_json::Error> for ConciergeError {
    fn from(e: serde_json::Error) -> ConciergeError {
        use serde_json::error::Category::*;
        error!(err = ?e, "JSON Serde error occurred");

        match e.classify() {
            Syntax | Data | Eof => ConciergeError::MalformedData,
            _ => ConciergeError::UnexpectedError,
        }
    }
}

impl From<reqwest::Error> for ConciergeError {
    fn from(e: reqwest::Error) -> ConciergeError {
        error!(
            err = ?e,
            is_timeout = e.is_timeout(),
            is_connect = e.is_connect(),
            "HTTP transport error occurred"
        );
        ConciergeError::Network(e.to_string())
    }
}

impl From<std::io::Error> for ConciergeError {
    fn from(e: std::io::Error) -> ConciergeError {
        error!(err = ?e, "local storage IO error occurred");
        ConciergeError::Storage(e.to_string())
    }
}
