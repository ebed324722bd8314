use std::result;

use thiserror::Error;

/// A type alias for handling errors related to pipetop.
pub type Result<T> = result::Result<T, PipetopError>;

/// An error that can occur while pipetop runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipetopError {
    /// The sample pipe could not be created or opened for reading.
    #[error("The sample pipe is unavailable, {0}")]
    ChannelUnavailable(String),
    /// A line read from the pipe did not parse into a sample.
    #[error("Malformed sample, {0}")]
    MalformedSample(String),
    /// An error when there is an IO exception.
    #[error("IO exception, {0}")]
    InvalidIo(String),
    /// An error when the configuration is invalid.
    #[error("Configuration error, {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for PipetopError {
    fn from(err: std::io::Error) -> Self {
        PipetopError::InvalidIo(err.to_string())
    }
}

impl From<toml_edit::de::Error> for PipetopError {
    fn from(err: toml_edit::de::Error) -> Self {
        PipetopError::ConfigError(err.to_string())
    }
}
