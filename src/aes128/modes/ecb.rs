use log::debug;
use rayon::prelude::*;

use crate::aes128::core::{decrypt_block, encrypt_block};
use crate::aes128::error::*;
use crate::aes128::key::ExpandedKey;

/// Encrypt/decrypt in parallel if input size is greater than 4 KiB.
pub const PARALLEL_THRESHOLD: usize = 4 * 1024;

/// Length of `len` bytes of plaintext after zero padding. There is always at least one padding
/// byte, so an input that is already a multiple of 16 grows by a whole block.
#[inline(always)]
pub(crate) fn padded_len(len: usize) -> usize {
    (len / 16 + 1) * 16
}

/// Core ECB encryption algorithm. Zero pads the plaintext and encrypts each 16-byte block
/// independently with the same round keys.
pub fn ecb_core_enc(plaintext: &[u8], round_keys: &ExpandedKey) -> Vec<u8> {
    let mut buf = vec![0u8; padded_len(plaintext.len())];
    buf[..plaintext.len()].copy_from_slice(plaintext);

    let apply = |block: &mut [u8]| {
        // chunks_exact_mut guarantees 16 byte blocks
        let mut state = [0u8; 16];
        state.copy_from_slice(block);
        block.copy_from_slice(&encrypt_block(&state, round_keys));
    };

    if buf.len() > PARALLEL_THRESHOLD {
        debug!("ecb: encrypting {} blocks in parallel", buf.len() / 16);
        buf.par_chunks_exact_mut(16).for_each(apply);
    } else {
        debug!("ecb: encrypting {} blocks serially", buf.len() / 16);
        buf.chunks_exact_mut(16).for_each(apply);
    }

    buf
}

/// Core ECB decryption algorithm. Decrypts each 16-byte block independently. Zero padding is left
/// in place; see [strip_zero_padding].
pub fn ecb_core_dec(ciphertext: &[u8], round_keys: &ExpandedKey) -> Result<Vec<u8>> {
    // ECB ciphertext should (and must) always be a non-empty multiple of 16 bytes.
    if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
        return Err(Error::InvalidCiphertext {
            len: ciphertext.len(),
            context: "ECB ciphertext not a non-empty multiple of 16 bytes",
        });
    }

    let mut buf = ciphertext.to_vec();

    let apply = |block: &mut [u8]| {
        let mut state = [0u8; 16];
        state.copy_from_slice(block);
        block.copy_from_slice(&decrypt_block(&state, round_keys));
    };

    if buf.len() > PARALLEL_THRESHOLD {
        debug!("ecb: decrypting {} blocks in parallel", buf.len() / 16);
        buf.par_chunks_exact_mut(16).for_each(apply);
    } else {
        debug!("ecb: decrypting {} blocks serially", buf.len() / 16);
        buf.chunks_exact_mut(16).for_each(apply);
    }

    Ok(buf)
}

/// Removes trailing zero bytes left by zero padding. Any genuine trailing zeros of the message
/// are removed as well, since zero padding cannot distinguish them.
pub fn strip_zero_padding(plaintext: &[u8]) -> &[u8] {
    let end = plaintext
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |i| i + 1);
    &plaintext[..end]
}
