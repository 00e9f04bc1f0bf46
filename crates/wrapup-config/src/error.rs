//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, validating or writing `wrapup.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file at the given path.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file is not valid TOML or does not match the schema.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parses but cannot drive a report.
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue {
        key: &'static str,
        reason: &'static str,
    },

    /// The configuration could not be rendered as TOML.
    #[error("cannot serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
