//! Error handling primitives shared across the crate.
//!
//! The formatting path itself never fails; these errors come from validating
//! injected clock readings, parsing zone policies and guarding host buffers.

use thiserror::Error;

/// Stable error codes that may cross the FFI boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NowMsecCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// Input failed validation.
    InvalidInput = 1,
    /// Destination buffer cannot hold the formatted value.
    BufferTooSmall = 2,
}

/// Canonical error type for the crate.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NowMsecError {
    /// Input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The host buffer is shorter than the value to copy.
    #[error("buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

/// Result alias used throughout the crate.
pub type NowMsecResult<T> = Result<T, NowMsecError>;

impl NowMsecError {
    /// Validation helper.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Machine parsable code for this error.
    pub fn code(&self) -> NowMsecCode {
        match self {
            Self::InvalidInput(_) => NowMsecCode::InvalidInput,
            Self::BufferTooSmall { .. } => NowMsecCode::BufferTooSmall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(NowMsecCode::Ok as u32, 0);
        assert_eq!(NowMsecCode::InvalidInput as u32, 1);
        assert_eq!(NowMsecCode::BufferTooSmall as u32, 2);
    }

    #[test]
    fn errors_map_to_codes() {
        assert_eq!(
            NowMsecError::invalid("zone").code(),
            NowMsecCode::InvalidInput
        );
        let err = NowMsecError::BufferTooSmall {
            needed: 23,
            capacity: 8,
        };
        assert_eq!(err.code(), NowMsecCode::BufferTooSmall);
        assert_eq!(err.to_string(), "buffer too small: need 23 bytes, have 8");
    }
}
