//! Key types for AES-256.

use core::fmt;

use crate::block::Block;
use crate::error::Error;

/// Key length in bytes.
pub const KEY_SIZE: usize = 32;

/// Number of cipher rounds for a 256-bit key.
pub const ROUNDS: usize = 14;

/// AES-256 key wrapper.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Aes256Key([u8; KEY_SIZE]);

impl Aes256Key {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Aes256Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes256Key(<redacted>)")
    }
}

impl From<[u8; KEY_SIZE]> for Aes256Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes256Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        <[u8; KEY_SIZE]>::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidKeyLength {
                actual: value.len(),
            })
    }
}

/// Expanded round keys for AES-256: the initial whitening key plus one per round.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundKeys(pub(crate) [Block; ROUNDS + 1]);

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys(<redacted>)")
    }
}

impl RoundKeys {
    /// Returns the round key at the requested index (0..=14).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
