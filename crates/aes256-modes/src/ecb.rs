//! Electronic codebook: every block goes through the cipher on its own.

use aes256_core::{Block, CipherContext, BLOCK_SIZE};

/// Applies `op` to each block of `input`, which must already be block aligned.
#[cfg(not(feature = "parallel"))]
fn map_blocks(input: &[u8], op: impl Fn(&Block) -> Block) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    for chunk in input.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        output.extend_from_slice(&op(&block));
    }
    output
}

#[cfg(feature = "parallel")]
fn map_blocks(input: &[u8], op: impl Fn(&Block) -> Block + Sync) -> Vec<u8> {
    use rayon::prelude::*;

    let mut output = vec![0u8; input.len()];
    output
        .par_chunks_exact_mut(BLOCK_SIZE)
        .zip(input.par_chunks_exact(BLOCK_SIZE))
        .for_each(|(dst, src)| {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(src);
            dst.copy_from_slice(&op(&block));
        });
    output
}

pub(crate) fn encrypt(ctx: &CipherContext, plaintext: &[u8]) -> Vec<u8> {
    map_blocks(plaintext, |block| ctx.encrypt(block))
}

pub(crate) fn decrypt(ctx: &CipherContext, ciphertext: &[u8]) -> Vec<u8> {
    map_blocks(ciphertext, |block| ctx.decrypt(block))
}
