use std::fmt;

use serde::Serialize;

/// Outcome of a process at a station.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PassResult {
    Pass,
    Fail,
}

impl PassResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for PassResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PassResult> for String {
    fn from(value: PassResult) -> Self {
        value.as_str().to_string()
    }
}

/// Operational status of a station.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StatusColor> for String {
    fn from(value: StatusColor) -> Self {
        value.as_str().to_string()
    }
}

/// Body of a `/data/report` call, minus the organization name which the
/// client adds.
///
/// Nothing is checked locally: `pass_result` is sent as given and a `None`
/// name is sent as `null`, leaving the API to reject either.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub line_name: Option<String>,
    pub station_name: Option<String>,
    pub pass_result: String,
    pub process_time_seconds: u64,
    pub fail_reason: Option<String>,
    pub fail_notes: Option<String>,
}

impl ReportRequest {
    pub fn new(
        line_name: impl Into<String>,
        station_name: impl Into<String>,
        pass_result: impl Into<String>,
        process_time_seconds: u64,
    ) -> Self {
        Self {
            line_name: Some(line_name.into()),
            station_name: Some(station_name.into()),
            pass_result: pass_result.into(),
            process_time_seconds,
            fail_reason: None,
            fail_notes: None,
        }
    }

    /// If the process failed, the reason why.
    pub fn with_fail_reason(mut self, fail_reason: impl Into<String>) -> Self {
        self.fail_reason = Some(fail_reason.into());
        self
    }

    /// If the process failed, additional details on why.
    pub fn with_fail_notes(mut self, fail_notes: impl Into<String>) -> Self {
        self.fail_notes = Some(fail_notes.into());
        self
    }
}

/// Body of a `/station/update` call, minus the organization name.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub line_name: Option<String>,
    pub station_name: Option<String>,
    pub status_color: String,
    pub status_reason: Option<String>,
    pub status_notes: Option<String>,
}

impl StatusUpdateRequest {
    pub fn new(
        line_name: impl Into<String>,
        station_name: impl Into<String>,
        status_color: impl Into<String>,
    ) -> Self {
        Self {
            line_name: Some(line_name.into()),
            station_name: Some(station_name.into()),
            status_color: status_color.into(),
            status_reason: None,
            status_notes: None,
        }
    }

    pub fn with_status_reason(mut self, status_reason: impl Into<String>) -> Self {
        self.status_reason = Some(status_reason.into());
        self
    }

    pub fn with_status_notes(mut self, status_notes: impl Into<String>) -> Self {
        self.status_notes = Some(status_notes.into());
        self
    }
}

/// A request body scoped to an organization. Serializes `orgName` followed
/// by the fields of the wrapped request.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Payload<'a, T> {
    org_name: &'a str,
    #[serde(flatten)]
    request: &'a T,
}

impl<'a, T: Serialize> Payload<'a, T> {
    pub fn new(org_name: &'a str, request: &'a T) -> Self {
        Self { org_name, request }
    }
}
