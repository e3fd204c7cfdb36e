//! Error types

use std::num::ParseIntError;

use thiserror::Error;

/// Failure to read an epoch-seconds integer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTimeError {
    #[error("empty value")]
    Empty,

    #[error("invalid syntax")]
    InvalidSyntax,

    #[error(transparent)]
    Int(#[from] ParseIntError),
}

/// Build info error types
#[derive(Debug, Error)]
pub enum BuildInfoError {
    #[error("invalid build time {value:?}: {source}")]
    InvalidBuildTime {
        value: String,
        #[source]
        source: ParseTimeError,
    },

    /// A valid integer that `chrono` cannot represent as a timestamp
    /// (roughly beyond ±262,000 years). Rejected at initialization like a
    /// malformed value rather than clamped.
    #[error("build time {0} is outside the representable range")]
    BuildTimeOutOfRange(i64),

    #[error("build info already initialized")]
    AlreadyInitialized,
}

/// Result type for build info operations
pub type BuildInfoResult<T> = Result<T, BuildInfoError>;
