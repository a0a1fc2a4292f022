mod request;
pub use self::request::{PassResult, Payload, ReportRequest, StatusColor, StatusUpdateRequest};

mod error_body;
pub use self::error_body::{ApiErrorBody, ErrorBody, GatewayErrorBody};
