//! HTTP client for the Andon public API.

use reqwest::{header, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    classify::{classify, fallback},
    types::{Payload, ReportRequest, StatusUpdateRequest},
    Error,
};

/// Production base URL of the public API.
pub const DEFAULT_ENDPOINT: &str = "https://portal.andonapp.com/public/api/v1";
/// Path for reporting the outcome of a process.
pub const REPORT_DATA_PATH: &str = "/data/report";
/// Path for changing the status of a station.
pub const UPDATE_STATUS_PATH: &str = "/station/update";

const CONTENT_TYPE: &str = "application/json; charset=utf-8";
const BEARER: &str = "Bearer ";

/// HTTP client for the Andon public API.
///
/// Holds the organization name and API token given at construction; the
/// organization name is added to every request body and the token is sent
/// as a bearer `Authorization` header. Each call makes exactly one attempt
/// and succeeds only on `200 OK`.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    org_name: String,
    auth_header_value: String,
    /// Base URL for the API. Defaults to [`DEFAULT_ENDPOINT`].
    endpoint: String,
}

impl Client {
    /// Creates a new client pointing at the production Andon API.
    pub fn new(org_name: impl Into<String>, api_token: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("andon_api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;
        Ok(Self {
            http,
            org_name: org_name.into(),
            auth_header_value: format!("{}{}", BEARER, api_token),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Replaces the base endpoint. Used for testing with wiremock.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.set_endpoint(endpoint);
        self
    }

    /// Replaces the base endpoint in place. Paths such as
    /// [`REPORT_DATA_PATH`] are appended to it verbatim.
    pub fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = endpoint.to_string();
    }

    /// The base endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The organization name added to every request body.
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let raw = format!("{}{}", &self.endpoint, path);
        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidEndpoint(format!("{}: {}", raw, e))
        })
    }

    async fn post<T: Serialize>(&self, path: &str, request: &T) -> Result<(), Error> {
        let url = self.get_url(path)?;
        let body = serde_json::to_vec(&Payload::new(&self.org_name, request))?;

        tracing::debug!("POST {}", url);
        let resp = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .header(header::AUTHORIZATION, &self.auth_header_value)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request: {}", e);
                Error::Network(e)
            })?;

        let status = resp.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;
        tracing::error!(
            "Request failed with status {}: {}",
            status,
            truncate_body(&text)
        );

        let parsed = serde_json::from_str::<Value>(&text).unwrap_or(Value::Null);
        Err(classify(&parsed).unwrap_or_else(|| fallback(status.as_u16(), &text)))
    }

    /// Reports the outcome of a process at a station.
    pub async fn report_data(&self, request: &ReportRequest) -> Result<(), Error> {
        self.post(REPORT_DATA_PATH, request).await
    }

    /// Changes the status of a station.
    pub async fn update_station_status(&self, request: &StatusUpdateRequest) -> Result<(), Error> {
        self.post(UPDATE_STATUS_PATH, request).await
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
