use super::NUM_ROUNDS;
use super::constants::{MUL2, MUL3, SBOX};
use super::util::add_round_key;
use crate::aes128::key::ExpandedKey;

/// Core AES-128 encryption function. Encrypts 16 byte block using provided round keys.
#[inline(always)]
pub fn encrypt_block(plaintext: &[u8; 16], round_keys: &ExpandedKey) -> [u8; 16] {
    let mut state = *plaintext;

    // initial round
    add_round_key(&mut state, round_keys.round_key(0));

    // rounds 1..=9
    for round in 1..NUM_ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.round_key(round));
    }

    // final round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.round_key(NUM_ROUNDS));

    state
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step.
/// The 0th row does not change.
/// The first row shifts left by one position.
/// The second row shifts left by two positions.
/// The third row shifts left by three positions.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;

    // row 0 (indices 0,4,8,12): unchanged

    // row 1 (1,5,9,13): left rotate by 1
    state[1] = s[5];
    state[5] = s[9];
    state[9] = s[13];
    state[13] = s[1];

    // row 2 (2,6,10,14): left rotate by 2
    state[2] = s[10];
    state[6] = s[14];
    state[10] = s[2];
    state[14] = s[6];

    // row 3 (3,7,11,15): left rotate by 3
    state[3] = s[15];
    state[7] = s[3];
    state[11] = s[7];
    state[15] = s[11];
}

/// MixColumns step. Each column is multiplied by a constant matrix in GF(2^8).
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (a, b, c, d) = (col[0], col[1], col[2], col[3]);
        col[0] = MUL2[a as usize] ^ MUL3[b as usize] ^ c ^ d;
        col[1] = a ^ MUL2[b as usize] ^ MUL3[c as usize] ^ d;
        col[2] = a ^ b ^ MUL2[c as usize] ^ MUL3[d as usize];
        col[3] = MUL3[a as usize] ^ b ^ c ^ MUL2[d as usize];
    }
}
