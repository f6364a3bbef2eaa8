//! Error type for the mode layer.

use thiserror::Error;

/// Failures reported by [`ModeDriver`](crate::ModeDriver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModeError {
    /// Input was empty or not a multiple of the 16-byte block size.
    #[error("input length must be a positive multiple of 16 bytes, got {actual}")]
    InvalidInputLength {
        /// Length of the rejected input.
        actual: usize,
    },
    /// CBC was requested without an initialization vector.
    #[error("CBC mode requires a 16-byte initialization vector")]
    MissingIv,
    /// The supplied initialization vector was not 16 bytes.
    #[error("invalid IV length: expected 16 bytes, got {actual}")]
    InvalidIvLength {
        /// Length of the rejected IV.
        actual: usize,
    },
    /// The block cipher core rejected its input, e.g. a key of the wrong
    /// length passed to [`ModeDriver::from_key`](crate::ModeDriver::from_key).
    /// The `From` impl also lets callers `?` core errors into this type.
    #[error(transparent)]
    Cipher(#[from] aes256_core::Error),
}

/// Result alias for mode operations.
pub type Result<T> = core::result::Result<T, ModeError>;
