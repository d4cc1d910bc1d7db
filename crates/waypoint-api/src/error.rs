//! Error types for endpoint metadata

use thiserror::Error;

/// Endpoint errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("endpoint is missing")]
    MissingEndpoint,

    #[error("endpoint name is required")]
    MissingName,

    #[error("endpoint handler is required")]
    MissingHandler,

    #[error("malformed path pattern {pattern:?}: {source}")]
    MalformedPath {
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("invalid endpoint configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Why a path pattern was rejected
#[derive(Debug, Error)]
pub enum PatternError {
    #[error(transparent)]
    Syntax(#[from] regex::Error),

    #[error("not a POSIX extended regular expression: {0}")]
    NotPosix(String),
}

/// Result type for endpoint operations
pub type ApiResult<T> = Result<T, ApiError>;
