//! Cipher block chaining.
//!
//! Encryption XORs each plaintext block with the chain value before the
//! cipher; decryption XORs the cipher output with the chain value. In both
//! directions the chain value starts at the IV and then tracks the previous
//! *ciphertext* block. Chain state lives on the stack of a single call.

use aes256_core::{xor_in_place, Block, CipherContext, BLOCK_SIZE};

pub(crate) fn encrypt(ctx: &CipherContext, iv: &Block, plaintext: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(plaintext.len());
    let mut chain = *iv;
    for chunk in plaintext.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        xor_in_place(&mut block, &chain);
        chain = ctx.encrypt(&block);
        output.extend_from_slice(&chain);
    }
    output
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn decrypt(ctx: &CipherContext, iv: &Block, ciphertext: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(ciphertext.len());
    let mut chain = *iv;
    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut current = [0u8; BLOCK_SIZE];
        current.copy_from_slice(chunk);
        let mut block = ctx.decrypt(&current);
        xor_in_place(&mut block, &chain);
        output.extend_from_slice(&block);
        chain = current;
    }
    output
}

/// Every chain value is a ciphertext block known up front, so blocks decrypt
/// independently.
#[cfg(feature = "parallel")]
pub(crate) fn decrypt(ctx: &CipherContext, iv: &Block, ciphertext: &[u8]) -> Vec<u8> {
    use rayon::prelude::*;

    let mut output = vec![0u8; ciphertext.len()];
    output
        .par_chunks_exact_mut(BLOCK_SIZE)
        .enumerate()
        .for_each(|(i, dst)| {
            let offset = i * BLOCK_SIZE;
            let mut current = [0u8; BLOCK_SIZE];
            current.copy_from_slice(&ciphertext[offset..offset + BLOCK_SIZE]);
            let mut chain = *iv;
            if i > 0 {
                chain.copy_from_slice(&ciphertext[offset - BLOCK_SIZE..offset]);
            }
            let mut block = ctx.decrypt(&current);
            xor_in_place(&mut block, &chain);
            dst.copy_from_slice(&block);
        });
    output
}
