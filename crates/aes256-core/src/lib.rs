//! From-scratch AES-256 block cipher core.
//!
//! This crate follows the FIPS-197 specification for the 256-bit key variant
//! and provides:
//! - The 14-round key schedule (15 round keys).
//! - Single-block encryption and decryption.
//! - [`CipherContext`], a key bound to its expanded schedule, with
//!   length-checked entry points for untyped byte slices.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod context;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::context::CipherContext;
pub use crate::error::{Error, Result};
pub use crate::key::{Aes256Key, RoundKeys, KEY_SIZE, ROUNDS};
