//! Request handling module
//!
//! - `router`: entry point, route dispatch and access logging
//! - `motivation`: the `GET /?date=` pipeline

pub mod motivation;
pub mod router;

pub use router::handle_request;
