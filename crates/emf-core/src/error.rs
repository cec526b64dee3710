//! Shared error type for the EMF crates.
//!
//! Accumulation itself never fails; errors only surface from config loading
//! and from limit enforcement under the `reject` policy.

use thiserror::Error;

/// Stable error codes (safe to match on or log as strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or out-of-range configuration.
    InvalidConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// A structural limit of the metric format was exceeded.
    LimitExceeded,
    /// Anything else (I/O and the like).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::LimitExceeded => "LIMIT_EXCEEDED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, EmfError>;

/// Unified error type.
#[derive(Debug, Error)]
pub enum EmfError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl EmfError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            EmfError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            EmfError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            EmfError::LimitExceeded(_) => ErrorCode::LimitExceeded,
            EmfError::Internal(_) => ErrorCode::Internal,
        }
    }
}
