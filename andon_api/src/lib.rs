//! Client for the Andon public API (www.andonapp.com).
//!
//! An API token is generated on the organization settings page within Andon.
//!
//! ```no_run
//! # async fn run() -> Result<(), andon_api::Error> {
//! use andon_api::{Client, PassResult, ReportRequest};
//!
//! let client = Client::new("orgName", "apiToken")?;
//! client
//!     .report_data(&ReportRequest::new("line 1", "station 1", PassResult::Pass, 120))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod classify;
mod client;
mod errors;
pub mod types;
pub use self::classify::classify;
pub use self::client::{Client, DEFAULT_ENDPOINT, REPORT_DATA_PATH, UPDATE_STATUS_PATH};
pub use self::errors::{Error, ErrorKind};
pub use self::types::{PassResult, ReportRequest, StatusColor, StatusUpdateRequest};
