//! Motivation module
//!
//! The pure part of the service: timestamp parsing, time-of-day
//! classification and message selection.

mod catalog;
mod daypart;
mod picker;
mod timestamp;

pub use catalog::MessageCatalog;
pub use daypart::TimeOfDay;
pub use picker::MessagePicker;
pub use timestamp::{local_hour, parse_timestamp};
