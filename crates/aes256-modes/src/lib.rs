//! Electronic-codebook and cipher-block-chaining modes for the AES-256 core.
//!
//! [`ModeDriver`] binds a [`CipherContext`] to a [`Mode`] (and an IV for
//! CBC) and transforms whole, block-aligned messages. Padding is the
//! caller's concern.
//!
//! With the `parallel` feature, ECB in both directions and CBC decryption
//! fan blocks out over a rayon thread pool. CBC encryption is inherently
//! sequential and always runs on the calling thread.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cbc;
mod driver;
mod ecb;
mod error;

pub use aes256_core::{Block, CipherContext, BLOCK_SIZE};
pub use driver::{Mode, ModeDriver, ParseModeError};
pub use error::{ModeError, Result};
