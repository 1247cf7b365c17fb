//! Request error taxonomy
//!
//! Every rejected request maps to the same `400 Bad Request`. The variants only
//! exist so the debug log can say which check failed.

use hyper::{Method, StatusCode};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("method {0} is not allowed")]
    MethodNotAllowed(Method),
    #[error("missing `date` query parameter")]
    MissingDate,
    #[error("unparsable `date` value: {0:?}")]
    InvalidDate(String),
}

impl RequestError {
    /// Status code sent to the client, identical for every variant
    pub const fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}
