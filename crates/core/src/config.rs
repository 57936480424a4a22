//! Gateway configuration, built once at startup and injected downwards.

use std::fmt;

use crate::{
    parse_with_default, ConfigError, DATABASE_URL_VAR, DEFAULT_HOST, DEFAULT_PORT, HOST_VAR,
    PORT_VAR,
};

#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl GatewayConfig {
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }

    /// Reads `COIN_STRING`, `GATEWAY_HOST` and `GATEWAY_PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup(DATABASE_URL_VAR).ok_or(ConfigError::MissingVar(DATABASE_URL_VAR))?;
        if database_url.trim().is_empty() {
            return Err(ConfigError::EmptyVar(DATABASE_URL_VAR));
        }
        let host = lookup(HOST_VAR)
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_with_default(PORT_VAR, lookup(PORT_VAR), DEFAULT_PORT);
        Ok(Self { database_url, host, port })
    }

    #[must_use]
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Connection strings carry credentials; keep them out of logs.
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("database_url", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
