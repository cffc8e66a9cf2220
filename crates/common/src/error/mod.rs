//! Error type for the pure helpers in this crate
//!
//! Kept separate from the domain error so the helpers stay usable without
//! pulling in the rest of the workspace; callers map it at the boundary.

use thiserror::Error;

/// Failures raised by the encoding helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("Invalid base64 input: {0}")]
    Base64(String),

    #[error("Decoded bytes are not valid UTF-8")]
    Utf8,
}

/// Result alias for helpers in this crate.
pub type CommonResult<T> = Result<T, CommonError>;
