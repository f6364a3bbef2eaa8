//! AES-256 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aes256Key, RoundKeys, KEY_SIZE, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

/// Words in the cipher key (Nk).
const KEY_WORDS: usize = KEY_SIZE / 4;

/// Words in the expanded schedule: four per round key.
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);

/// Round constants; a 256-bit key consumes the first seven.
const RCON: [u8; 7] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 256-bit key into 15 round keys.
pub fn expand_key(key: &Aes256Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in KEY_WORDS..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / KEY_WORDS - 1]) << 24);
        } else if i % KEY_WORDS == 4 {
            // 256-bit keys substitute halfway through every eight-word group.
            temp = sub_word(temp);
        }
        w[i] = w[i - KEY_WORDS] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    // FIPS-197 appendix C.3.
    const FIPS_KEY: [u8; 32] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d,
        0x1e, 0x1f,
    ];
    const FIPS_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const FIPS_CIPHER: [u8; 16] = [
        0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60,
        0x89,
    ];

    // FIPS-197 appendix A.3.
    const SCHEDULE_KEY_HEX: &str =
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

    #[test]
    fn key_schedule_matches_fips_expansion() {
        let bytes: [u8; 32] = hex::decode(SCHEDULE_KEY_HEX)
            .unwrap()
            .try_into()
            .unwrap();
        let rks = expand_key(&Aes256Key::from(bytes));
        assert_eq!(&rks.get(0)[..], &bytes[..16]);
        assert_eq!(&rks.get(1)[..], &bytes[16..]);
        // w[8..12] exercises the RotWord/Rcon path.
        assert_eq!(hex::encode(rks.get(2)), "9ba354118e6925afa51a8b5f2067fcde");
        // w[12..16] exercises the mid-group SubWord.
        assert_eq!(hex::encode(rks.get(3)), "a8b09c1a93d194cdbe49846eb75d5b9a");
        assert_eq!(hex::encode(rks.get(14)), "fe4890d1e6188d0b046df344706c631e");
    }

    #[test]
    fn encrypt_matches_fips_vector() {
        let rks = expand_key(&Aes256Key::from(FIPS_KEY));
        assert_eq!(encrypt_block(&FIPS_PLAIN, &rks), FIPS_CIPHER);
    }

    #[test]
    fn decrypt_matches_fips_vector() {
        let rks = expand_key(&Aes256Key::from(FIPS_KEY));
        assert_eq!(decrypt_block(&FIPS_CIPHER, &rks), FIPS_PLAIN);
    }

    #[test]
    fn zero_key_zero_block() {
        let rks = expand_key(&Aes256Key::from([0u8; 32]));
        assert_eq!(
            hex::encode(encrypt_block(&[0u8; 16], &rks)),
            "dc95c078a2408989ad48a21492842087"
        );
    }

    #[test]
    fn expansion_is_deterministic() {
        let key = Aes256Key::from(FIPS_KEY);
        assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..100 {
            let mut key_bytes = [0u8; 32];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let rks = expand_key(&Aes256Key::from(key_bytes));
            let ct = encrypt_block(&block, &rks);
            assert_ne!(ct, block);
            assert_eq!(decrypt_block(&ct, &rks), block);
        }
    }
}
