//! Known-answer vectors for both modes.

use aes256_modes::{CipherContext, Mode, ModeDriver};
use sha2::{Digest, Sha512};

const ALL_ONES: [u8; 16] = [0xff; 16];

/// Key and IV derived from `SHA-512("secret")`: bytes 0..32 and 32..48.
fn secret_material() -> ([u8; 32], [u8; 16]) {
    let digest = Sha512::digest(b"secret");
    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    key.copy_from_slice(&digest[..32]);
    iv.copy_from_slice(&digest[32..48]);
    (key, iv)
}

#[test]
fn secret_digest_slices() {
    let (key, iv) = secret_material();
    assert_eq!(
        hex::encode(key),
        "bd2b1aaf7ef4f09be9f52ce2d8d599674d81aa9d6a4421696dc4d93dd0619d68"
    );
    assert_eq!(hex::encode(iv), "2ce56b4d64a9ef097761ced99e0f6726");
}

#[test]
fn ecb_decrypts_all_ones_block() {
    let (key, _) = secret_material();
    let driver = ModeDriver::new(Mode::Ecb, CipherContext::from(key), None).unwrap();
    let plaintext = driver.decrypt(&ALL_ONES).unwrap();
    assert_eq!(hex::encode(plaintext), "ee4002253570ea6e16fcdef09ea66e23");
}

#[test]
fn cbc_decrypts_all_ones_block() {
    let (key, iv) = secret_material();
    let driver = ModeDriver::new(Mode::Cbc, CipherContext::from(key), Some(&iv)).unwrap();
    let plaintext = driver.decrypt(&ALL_ONES).unwrap();
    assert_eq!(hex::encode(plaintext), "c2a5696851d90567619d102900a90905");
}

#[test]
fn cbc_decrypts_two_all_ones_blocks() {
    let (key, iv) = secret_material();
    let driver = ModeDriver::new(Mode::Cbc, CipherContext::from(key), Some(&iv)).unwrap();
    let plaintext = driver.decrypt(&[0xff; 32]).unwrap();
    assert_eq!(
        hex::encode(plaintext),
        "c2a5696851d90567619d102900a9090511bffddaca8f1591e903210f615991dc"
    );
}

#[test]
fn secret_key_three_block_message() {
    let (key, iv) = secret_material();
    let message = b"first block heresecond block 16bthird one, done.";

    let ecb = ModeDriver::new(Mode::Ecb, CipherContext::from(key), None).unwrap();
    let ecb_ct = ecb.encrypt(message).unwrap();
    assert_eq!(
        hex::encode(&ecb_ct),
        "af17f78ba7a2356cfbef44be7ae2cca2\
         401e42101be7e5ea52fcd7f7f8c95e66\
         618a03d215d7a9f678103ebb195a9736"
    );
    assert_eq!(ecb.decrypt(&ecb_ct).unwrap(), message);

    let cbc = ModeDriver::new(Mode::Cbc, CipherContext::from(key), Some(&iv)).unwrap();
    let cbc_ct = cbc.encrypt(message).unwrap();
    assert_eq!(
        hex::encode(&cbc_ct),
        "96ef28b1864121680e0355aa54be7be8\
         117d0042bb7251857253bfcf1fcb7689\
         2113db930335f79612ff3ed85d23c3d9"
    );
    assert_eq!(cbc.decrypt(&cbc_ct).unwrap(), message);
}

// NIST zero-key vectors: three zero blocks under ECB and under CBC with a zero IV.
#[test]
fn zero_key_vectors() {
    let zeros = [0u8; 48];

    let ecb = ModeDriver::new(Mode::Ecb, CipherContext::from([0u8; 32]), None).unwrap();
    assert_eq!(
        hex::encode(ecb.encrypt(&zeros).unwrap()),
        "dc95c078a2408989ad48a21492842087".repeat(3)
    );

    let cbc =
        ModeDriver::new(Mode::Cbc, CipherContext::from([0u8; 32]), Some(&[0u8; 16])).unwrap();
    let ct = cbc.encrypt(&zeros).unwrap();
    assert_eq!(
        hex::encode(&ct),
        "dc95c078a2408989ad48a21492842087\
         08c374848c228233c2b34f332bd2e9d3\
         8b70c515a6663d38cdb8e6532b266491"
    );
    assert_eq!(cbc.decrypt(&ct).unwrap(), zeros);
}
