//! Error types for the policy layer.

use thiserror::Error;

/// Result type for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Errors that can occur while loading or applying a media embed policy.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The allow-list and the available types disagree, or the settings are
    /// self-contradictory. Not recoverable at runtime.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid TOML for its schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A machine name in the configuration is malformed.
    #[error("invalid identifier: {0}")]
    Identifier(#[from] medialib_types::Error),
}
