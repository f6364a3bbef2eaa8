//! Keyed cipher context: the round key schedule expanded from one key.

use core::fmt;

use crate::block::{block_from_slice, Block};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::Result;
use crate::key::{Aes256Key, RoundKeys, ROUNDS};

/// The round key schedule of one AES-256 key, computed once at construction.
///
/// The context is immutable afterwards and can be shared freely across
/// threads; every block operation is a pure function of the schedule.
#[derive(Clone)]
pub struct CipherContext {
    round_keys: RoundKeys,
}

impl CipherContext {
    /// Builds a context from raw key bytes.
    ///
    /// Fails with [`Error::InvalidKeyLength`](crate::Error::InvalidKeyLength)
    /// unless `key` is exactly 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Aes256Key::try_from(key).map(Self::from)
    }

    /// Encrypts one block given as a slice, validating its length.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<Block> {
        block_from_slice(block).map(|b| self.encrypt(&b))
    }

    /// Decrypts one block given as a slice, validating its length.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<Block> {
        block_from_slice(block).map(|b| self.decrypt(&b))
    }

    /// Encrypts one typed block.
    #[inline]
    pub fn encrypt(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one typed block.
    #[inline]
    pub fn decrypt(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}

impl From<Aes256Key> for CipherContext {
    fn from(key: Aes256Key) -> Self {
        Self {
            round_keys: expand_key(&key),
        }
    }
}

impl From<[u8; 32]> for CipherContext {
    fn from(key: [u8; 32]) -> Self {
        Self::from(Aes256Key::from(key))
    }
}

// Key material stays out of logs and panic messages.
impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("rounds", &ROUNDS)
            .finish_non_exhaustive()
    }
}
