//! Service layer for sensor-gateway
//!
//! Centralizes input validation and result shaping between HTTP handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod reading_service;

pub use error::ServiceError;
pub use reading_service::{clamp_history_limit, parse_reading_value, ReadingService};
