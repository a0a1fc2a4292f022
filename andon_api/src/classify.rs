//! Maps an error response body to an [`Error`].

use serde_json::Value;

use crate::{
    errors::{Error, ErrorKind},
    types::ErrorBody,
};

/// Classifies a parsed error response body.
///
/// `errorType` is checked before `status`, by key presence. Returns `None`
/// when the body is null, empty, or carries neither key; the caller is
/// expected to fall back to a generic error built from the HTTP status and
/// response text.
pub fn classify(body: &Value) -> Option<Error> {
    ErrorBody::from_value(body).map(ErrorBody::into_error)
}

impl ErrorBody {
    /// Converts a recognized error body into the matching [`Error`].
    pub fn into_error(self) -> Error {
        match self {
            ErrorBody::Api(body) => Error::api(body.kind(), body.error_message),
            ErrorBody::Gateway(body) => {
                tracing::debug!(
                    status = %body.status,
                    error = body.error.as_deref().unwrap_or(""),
                    path = body.path.as_deref().unwrap_or(""),
                    timestamp = ?body.timestamp,
                    "Gateway error envelope"
                );
                Error::api(body.kind(), body.message)
            }
        }
    }
}

/// Generic failure used when the body could not be classified.
pub(crate) fn fallback(status: u16, text: &str) -> Error {
    Error::api(ErrorKind::Generic, format!("Status {}: {}", status, text))
}
