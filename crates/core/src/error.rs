use thiserror::Error;

/// Errors raised while assembling the gateway configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("environment variable {0} is empty")]
    EmptyVar(&'static str),
}
