//! Command-line interface for the AES-256 ECB/CBC workspace.

#![forbid(unsafe_code)]

mod material;

use std::fs;
use std::path::{Path, PathBuf};

use aes256_modes::{CipherContext, Mode, ModeDriver, BLOCK_SIZE};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::material::KeyMaterial;

/// AES-256 ECB/CBC CLI.
#[derive(Parser)]
#[command(name = "aes256", version, about = "AES-256 in ECB and CBC mode")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the key and IV derived from a passphrase.
    Derive {
        /// Passphrase hashed with SHA-512.
        #[arg(long)]
        passphrase: String,
    },
    /// Encrypt block-aligned data.
    Encrypt(CryptArgs),
    /// Decrypt block-aligned data.
    Decrypt(CryptArgs),
    /// Reproduce the all-ones block decryption, then round-trip random data.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct CryptArgs {
    /// Block-chaining mode: `ecb` or `cbc`.
    #[arg(long)]
    mode: Mode,
    /// Derive key (and IV) from SHA-512 of this passphrase.
    #[arg(long, conflicts_with = "key_hex")]
    passphrase: Option<String>,
    /// AES-256 key as 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
    /// IV as 32 hex characters; overrides a passphrase-derived IV.
    #[arg(long, value_name = "HEX")]
    iv_hex: Option<String>,
    /// Input as hex.
    #[arg(
        long,
        value_name = "HEX",
        conflicts_with = "input",
        required_unless_present = "input"
    )]
    input_hex: Option<String>,
    /// Input file (length must be a multiple of 16 bytes).
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Write raw output bytes here instead of printing hex.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Derive { passphrase } => cmd_derive(&passphrase),
        Commands::Encrypt(args) => cmd_crypt(&args, Direction::Encrypt),
        Commands::Decrypt(args) => cmd_crypt(&args, Direction::Decrypt),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_derive(passphrase: &str) -> Result<()> {
    let material = KeyMaterial::from_passphrase(passphrase);
    println!("key: {}", hex::encode(material.key.as_bytes()));
    if let Some(iv) = material.iv {
        println!("iv:  {}", hex::encode(iv));
    }
    Ok(())
}

fn cmd_crypt(args: &CryptArgs, direction: Direction) -> Result<()> {
    let out = run_crypt(args, direction)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &out).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), bytes = out.len(), "output written");
        }
        None => println!("{}", hex::encode(out)),
    }
    Ok(())
}

fn run_crypt(args: &CryptArgs, direction: Direction) -> Result<Vec<u8>> {
    let material = KeyMaterial::resolve(
        args.passphrase.as_deref(),
        args.key_hex.as_deref(),
        args.iv_hex.as_deref(),
    )?;
    let mode = args.mode;
    let iv = if mode.uses_iv() { material.iv } else { None };
    let iv = iv.as_ref().map(|b| &b[..]);
    let driver = ModeDriver::from_key(mode, material.key.as_bytes(), iv)
        .context("configure mode driver")?;

    let data = read_input(args.input_hex.as_deref(), args.input.as_deref())?;
    debug!(%mode, bytes = data.len(), "processing input");

    match direction {
        Direction::Encrypt => driver.encrypt(&data).context("encrypt"),
        Direction::Decrypt => driver.decrypt(&data).context("decrypt"),
    }
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let material = KeyMaterial::from_passphrase("secret");
    let Some(iv) = material.iv else {
        bail!("passphrase derivation did not yield an IV");
    };
    println!("key: {}", hex::encode(material.key.as_bytes()));
    println!("iv:  {}", hex::encode(iv));

    let ciphertext = [0xffu8; BLOCK_SIZE];
    println!("ct:  {}", hex::encode(ciphertext));

    let mut rng = seeded_rng(seed);
    let mut plaintext = [0u8; 4 * BLOCK_SIZE];
    rng.fill_bytes(&mut plaintext);

    for mode in [Mode::Ecb, Mode::Cbc] {
        let iv = mode.uses_iv().then_some(&iv[..]);
        let driver = ModeDriver::new(mode, CipherContext::from(material.key), iv)?;
        let pt = driver.decrypt(&ciphertext)?;
        println!("{mode} pt: {}", hex::encode(pt));

        let round_trip = driver.decrypt(&driver.encrypt(&plaintext)?)?;
        if round_trip != plaintext {
            bail!("{mode} round trip failed");
        }
    }
    println!("random round trip ok: {}", hex::encode(plaintext));
    Ok(())
}

fn read_input(input_hex: Option<&str>, input: Option<&Path>) -> Result<Vec<u8>> {
    match (input_hex, input) {
        (Some(hex_str), _) => hex::decode(hex_str.trim()).context("decode input hex"),
        (None, Some(path)) => fs::read(path).with_context(|| format!("read {}", path.display())),
        (None, None) => bail!("one of --input-hex or --input is required"),
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
