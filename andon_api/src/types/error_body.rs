//! The two error envelopes the API is known to answer with.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::errors::ErrorKind;

/// A recognized error body.
///
/// The shape is chosen by which keys are present, not by their types:
/// `errorType` selects [`ErrorBody::Api`], otherwise `status` selects
/// [`ErrorBody::Gateway`].
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
    Api(ApiErrorBody),
    Gateway(GatewayErrorBody),
}

impl ErrorBody {
    /// Recognizes an error body. Returns `None` for null, non-object and
    /// empty bodies, and for objects carrying neither known key.
    pub fn from_value(body: &Value) -> Option<Self> {
        let map = body.as_object()?;
        if let Some(error_type) = map.get("errorType") {
            return Some(Self::Api(ApiErrorBody {
                error_type: error_type.as_str().map(str::to_string),
                error_message: text_field(map, "errorMessage"),
            }));
        }
        let status = map.get("status")?;
        Some(Self::Gateway(GatewayErrorBody {
            status: status.clone(),
            message: text_field(map, "message"),
            error: map.get("error").and_then(Value::as_str).map(str::to_string),
            path: map.get("path").and_then(Value::as_str).map(str::to_string),
            timestamp: map.get("timestamp").and_then(parse_timestamp),
        }))
    }
}

/// `{"errorType": "...", "errorMessage": "..."}`
#[derive(Clone, Debug, PartialEq)]
pub struct ApiErrorBody {
    /// `None` when `errorType` is present but not a string.
    pub error_type: Option<String>,
    pub error_message: String,
}

impl ApiErrorBody {
    pub fn kind(&self) -> ErrorKind {
        self.error_type
            .as_deref()
            .map_or(ErrorKind::Generic, ErrorKind::from_error_type)
    }
}

/// Envelope produced by the servlet layer in front of the API when the
/// request fails before reaching it, e.g.
/// `{"timestamp": "...", "status": 401, "error": "Unauthorized", "message": "...", "path": "..."}`.
#[derive(Clone, Debug, PartialEq)]
pub struct GatewayErrorBody {
    /// Raw `status` value; usually an integer.
    pub status: Value,
    pub message: String,
    pub error: Option<String>,
    pub path: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl GatewayErrorBody {
    /// Numeric statuses compare by value, so `401.0` is `401`. Anything
    /// that is not a number is an internal error.
    pub fn kind(&self) -> ErrorKind {
        if let Some(code) = self.status.as_i64() {
            return ErrorKind::from_status(code);
        }
        match self.status.as_f64() {
            Some(code) if code == 401.0 => ErrorKind::Unauthorized,
            Some(code) if (400.0..500.0).contains(&code) => ErrorKind::BadRequest,
            _ => ErrorKind::InternalError,
        }
    }
}

// Missing and null read as empty; other non-strings keep their JSON text.
fn text_field(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    let s = raw.as_str()?;
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
