/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Error type returned by every fallible operation of the client
#[derive(Debug)]
pub enum AppError {
    /// Transport failure reported by `reqwest`
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Filesystem failure
    Io(std::io::Error),
    /// The backend rejected the bearer token (HTTP 401)
    Unauthorized,
    /// The requested resource does not exist (HTTP 404)
    NotFound,
    /// Any other non-success response
    Api {
        /// Status code returned by the backend
        status: StatusCode,
        /// Message from the `error` field of the body, or the raw body
        message: String,
    },
    /// The token store could not be read or written
    Storage(String),
    /// Input rejected before any request was sent
    InvalidInput(String),
    /// A response body did not have the expected shape
    Deserialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Api { status, message } => {
                write!(f, "api error {status}: {message}")
            }
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
