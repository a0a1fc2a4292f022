//! Error types for the API client.

use std::fmt;

/// The kind of failure reported by the Andon API.
///
/// `Generic` is the catch-all: it is used for unrecognized `errorType`
/// values and for non-OK responses whose body could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Something is wrong with the request.
    BadRequest,
    /// One of the request inputs is invalid.
    InvalidRequest,
    /// A referenced resource (such as a station) does not exist.
    ResourceNotFound,
    /// Authorization failed.
    Unauthorized,
    /// A failure within Andon.
    InternalError,
    /// General request failure.
    Generic,
}

impl ErrorKind {
    /// Maps an `errorType` value from an Andon error body. Unknown values
    /// map to [`ErrorKind::Generic`].
    pub fn from_error_type(error_type: &str) -> Self {
        match error_type {
            "BAD_REQUEST" => Self::BadRequest,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "RESOURCE_NOT_FOUND" => Self::ResourceNotFound,
            "UNAUTHORIZED_REQUEST" => Self::Unauthorized,
            "INTERNAL_ERROR" => Self::InternalError,
            _ => Self::Generic,
        }
    }

    /// Maps the `status` field of a gateway error envelope.
    pub fn from_status(status: i64) -> Self {
        match status {
            401 => Self::Unauthorized,
            400..=499 => Self::BadRequest,
            _ => Self::InternalError,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "Bad request",
            Self::InvalidRequest => "Invalid request",
            Self::ResourceNotFound => "Resource not found",
            Self::Unauthorized => "Unauthorized request",
            Self::InternalError => "Internal error",
            Self::Generic => "Request failed",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with a non-OK status.
    #[error("{kind}: {message}")]
    Api { kind: ErrorKind, message: String },
    /// The request never produced a response (connection, TLS, timeout).
    #[error("Network error")]
    Network(#[from] reqwest::Error),
    /// The request body could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The configured endpoint does not form a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

impl Error {
    pub(crate) fn api(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Api {
            kind,
            message: message.into(),
        }
    }

    /// The API error kind, or `None` for failures that happened before a
    /// response was received.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The message carried by an API error.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
