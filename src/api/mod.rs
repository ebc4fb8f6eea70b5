//! API boundary for formkit
//!
//! The JSON envelope the presentation layer speaks: typed requests in,
//! `status: ok` / `status: error` envelopes out. Schema configuration
//! failures surface as error responses with stable codes; submitted-value
//! failures ride in the submit payload as the error report.

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult};
pub use handler::ApiHandler;
pub use request::Request;
pub use response::Response;
