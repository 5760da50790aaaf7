//! Error types for the CDH vector commitment scheme

use thiserror::Error;

/// Malformed calls into the scheme.
///
/// A proof that simply does not check out is not an error: `verify`
/// reports it as `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VcError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Length mismatch: expected {expected} entries, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Index out of range: {index} is not below vector length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, VcError>;
