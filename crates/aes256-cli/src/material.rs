//! Key and IV material supplied on the command line.

use aes256_core::{Aes256Key, BLOCK_SIZE, KEY_SIZE};
use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha512};

/// A 32-byte key plus an optional 16-byte IV.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMaterial {
    pub key: Aes256Key,
    pub iv: Option<[u8; BLOCK_SIZE]>,
}

impl KeyMaterial {
    /// SHA-512 of the passphrase: the first 32 bytes form the key, the next 16 the IV.
    pub fn from_passphrase(passphrase: &str) -> Self {
        let digest = Sha512::digest(passphrase.as_bytes());
        let mut key = [0u8; KEY_SIZE];
        let mut iv = [0u8; BLOCK_SIZE];
        key.copy_from_slice(&digest[..KEY_SIZE]);
        iv.copy_from_slice(&digest[KEY_SIZE..KEY_SIZE + BLOCK_SIZE]);
        Self {
            key: Aes256Key::from(key),
            iv: Some(iv),
        }
    }

    /// Resolves the CLI flags. An explicit IV overrides one derived from a passphrase.
    pub fn resolve(
        passphrase: Option<&str>,
        key_hex: Option<&str>,
        iv_hex: Option<&str>,
    ) -> Result<Self> {
        let mut material = match (passphrase, key_hex) {
            (Some(passphrase), None) => Self::from_passphrase(passphrase),
            (None, Some(key_hex)) => Self {
                key: parse_key_hex(key_hex)?,
                iv: None,
            },
            (Some(_), Some(_)) => bail!("pass either --passphrase or --key-hex, not both"),
            (None, None) => bail!("one of --passphrase or --key-hex is required"),
        };
        if let Some(iv_hex) = iv_hex {
            material.iv = Some(parse_iv_hex(iv_hex)?);
        }
        Ok(material)
    }
}

pub fn parse_key_hex(hex_str: &str) -> Result<Aes256Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes256Key::try_from(bytes.as_slice())
        .context("AES-256 key must be 32 bytes (64 hex characters)")
}

pub fn parse_iv_hex(hex_str: &str) -> Result<[u8; BLOCK_SIZE]> {
    let bytes = hex::decode(hex_str.trim()).context("decode IV hex")?;
    match <[u8; BLOCK_SIZE]>::try_from(bytes.as_slice()) {
        Ok(iv) => Ok(iv),
        Err(_) => bail!("IV must be 16 bytes (32 hex characters), got {}", bytes.len()),
    }
}
