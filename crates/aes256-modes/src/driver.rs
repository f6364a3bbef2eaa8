//! Mode selection and the driver that runs the cipher across a message.

use core::fmt;
use core::str::FromStr;

use aes256_core::{Block, CipherContext, BLOCK_SIZE};
use tracing::{debug, trace, warn};

use crate::error::{ModeError, Result};
use crate::{cbc, ecb};

/// Block-chaining mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic codebook: blocks are processed independently.
    Ecb,
    /// Cipher block chaining seeded by a 16-byte IV.
    Cbc,
}

impl Mode {
    /// Whether the mode consumes an initialization vector.
    pub fn uses_iv(self) -> bool {
        matches!(self, Mode::Cbc)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
        })
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode `{0}`, expected `ecb` or `cbc`")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// Runs a [`CipherContext`] over block-aligned messages in a fixed mode.
///
/// The driver never pads. Inputs must be a non-empty multiple of 16 bytes
/// and are rejected whole otherwise, so no partial output is ever produced.
///
/// For [`Mode::Cbc`] the IV is stored once and every `encrypt`/`decrypt` call
/// starts a fresh chain from it. For [`Mode::Ecb`] a supplied IV is ignored.
#[derive(Clone, Debug)]
pub struct ModeDriver {
    mode: Mode,
    context: CipherContext,
    iv: Option<Block>,
}

impl ModeDriver {
    /// Creates a driver.
    ///
    /// Fails with [`ModeError::MissingIv`] for CBC without an IV and with
    /// [`ModeError::InvalidIvLength`] for a CBC IV that is not 16 bytes.
    pub fn new(mode: Mode, context: CipherContext, iv: Option<&[u8]>) -> Result<Self> {
        let iv = match (mode, iv) {
            (Mode::Cbc, None) => return Err(ModeError::MissingIv),
            (Mode::Cbc, Some(bytes)) => Some(
                Block::try_from(bytes)
                    .map_err(|_| ModeError::InvalidIvLength { actual: bytes.len() })?,
            ),
            (Mode::Ecb, Some(bytes)) => {
                warn!(iv_len = bytes.len(), "ECB mode ignores the supplied IV");
                None
            }
            (Mode::Ecb, None) => None,
        };
        debug!(%mode, "mode driver ready");
        Ok(Self { mode, context, iv })
    }

    /// Expands `key` and creates a driver in one step.
    ///
    /// A key that is not 32 bytes surfaces as [`ModeError::Cipher`]; IV
    /// handling is the same as [`ModeDriver::new`].
    pub fn from_key(mode: Mode, key: &[u8], iv: Option<&[u8]>) -> Result<Self> {
        let context = CipherContext::new(key)?;
        Self::new(mode, context, iv)
    }

    /// Selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The stored IV; always `None` in ECB mode.
    pub fn iv(&self) -> Option<&Block> {
        self.iv.as_ref()
    }

    /// Encrypts a block-aligned plaintext.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let blocks = check_aligned(plaintext)?;
        trace!(mode = %self.mode, blocks, "encrypt");
        Ok(match self.chain_seed() {
            Some(iv) => cbc::encrypt(&self.context, iv, plaintext),
            None => ecb::encrypt(&self.context, plaintext),
        })
    }

    /// Decrypts a block-aligned ciphertext.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let blocks = check_aligned(ciphertext)?;
        trace!(mode = %self.mode, blocks, "decrypt");
        Ok(match self.chain_seed() {
            Some(iv) => cbc::decrypt(&self.context, iv, ciphertext),
            None => ecb::decrypt(&self.context, ciphertext),
        })
    }

    fn chain_seed(&self) -> Option<&Block> {
        match self.mode {
            Mode::Cbc => self.iv.as_ref(),
            Mode::Ecb => None,
        }
    }
}

/// Returns the block count, or an error unless `data` is a positive multiple of 16.
fn check_aligned(data: &[u8]) -> Result<usize> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(ModeError::InvalidInputLength { actual: data.len() });
    }
    Ok(data.len() / BLOCK_SIZE)
}
