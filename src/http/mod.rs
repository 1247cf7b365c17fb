//! HTTP protocol layer module
//!
//! Response builders and query-string helpers, decoupled from the
//! message selection logic.

pub mod query;
pub mod response;

pub use query::query_param;
pub use response::{build_error_response, build_text_response};
