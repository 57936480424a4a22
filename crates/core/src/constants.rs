//! Shared constants for sensor-gateway.
//!
//! Fixed LIMIT clauses and defaults used by the store, service and HTTP layers.

/// Timestamp format used in every JSON and HTML response.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum number of points returned by the history endpoint.
pub const HISTORY_MAX_LIMIT: u32 = 50;

/// Smallest history window a caller may request.
pub const HISTORY_MIN_LIMIT: u32 = 10;

/// Number of recent readings the "all sensors" dashboard is built from.
pub const DASHBOARD_ALL_LIMIT: u32 = 100;

/// Number of recent readings in a single-sensor dashboard.
pub const DASHBOARD_SINGLE_LIMIT: u32 = 10;

/// Environment variable carrying the database connection string.
pub const DATABASE_URL_VAR: &str = "COIN_STRING";

pub const HOST_VAR: &str = "GATEWAY_HOST";

pub const PORT_VAR: &str = "GATEWAY_PORT";

pub const DEFAULT_HOST: &str = "127.0.0.1";

pub const DEFAULT_PORT: u16 = 5000;
