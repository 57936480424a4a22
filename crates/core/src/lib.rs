//! Core types for sensor-gateway
//!
//! Domain types, result shaping and configuration shared across all other crates.

mod config;
mod constants;
mod dashboard;
mod env_config;
mod error;
mod reading;

pub use config::*;
pub use constants::*;
pub use dashboard::*;
pub use env_config::*;
pub use error::*;
pub use reading::*;
