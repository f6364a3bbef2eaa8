//! Error type for the block cipher core.

use thiserror::Error;

/// Precondition violations reported by the block cipher core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The key was not exactly 32 bytes.
    #[error("invalid key length: expected 32 bytes, got {actual}")]
    InvalidKeyLength {
        /// Length of the rejected key.
        actual: usize,
    },
    /// The block was not exactly 16 bytes.
    #[error("invalid block length: expected 16 bytes, got {actual}")]
    InvalidBlockLength {
        /// Length of the rejected block.
        actual: usize,
    },
}

/// Result alias used throughout the core.
pub type Result<T> = core::result::Result<T, Error>;
