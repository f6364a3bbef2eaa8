//! Encrypts a short message under CBC and decrypts it again.

use aes256_modes::{CipherContext, Mode, ModeDriver};

fn main() {
    // Fixed material for reproducibility in the example.
    let key = [0x24u8; 32];
    let iv = [0x42u8; 16];
    let driver = ModeDriver::new(Mode::Cbc, CipherContext::from(key), Some(&iv))
        .expect("16-byte IV is accepted");

    let mut message = [0u8; 32];
    message[..16].copy_from_slice(b"first block here");
    message[16..].copy_from_slice(b"second blockhere");

    let ciphertext = driver.encrypt(&message).expect("aligned input");
    let plaintext = driver.decrypt(&ciphertext).expect("aligned input");
    assert_eq!(plaintext, message);

    println!("example succeeded; CBC round trip restored the message");
}
