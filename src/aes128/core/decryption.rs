use super::NUM_ROUNDS;
use super::constants::{MUL9, MUL11, MUL13, MUL14, SBOX_INV};
use super::util::add_round_key;
use crate::aes128::key::ExpandedKey;

/// Core AES-128 decryption function. Decrypts 16 byte block using provided round keys.
#[inline(always)]
pub fn decrypt_block(ciphertext: &[u8; 16], round_keys: &ExpandedKey) -> [u8; 16] {
    let mut state = *ciphertext;

    // initial round undoes the final encryption round (no mixcolumns)
    add_round_key(&mut state, round_keys.round_key(NUM_ROUNDS));
    shift_rows_inv(&mut state);
    sub_bytes_inv(&mut state);

    // rounds 9..=1. InvMixColumns must see the state after the round key is removed.
    for round in (1..NUM_ROUNDS).rev() {
        add_round_key(&mut state, round_keys.round_key(round));
        mix_columns_inv(&mut state);
        shift_rows_inv(&mut state);
        sub_bytes_inv(&mut state);
    }

    add_round_key(&mut state, round_keys.round_key(0));

    state
}

/// Inverse SubBytes step. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX_INV[*byte as usize];
    }
}

/// Inverse ShiftRows step.
/// The 0th row does not change.
/// The first row shifts right by one position.
/// The second row shifts right by two positions.
/// The third row shifts right by three positions.
/// [
///     01 02 03 04   ---->   01 02 03 04
///     06 07 08 05   ---->   05 06 07 08
///     11 12 09 10   ---->   09 10 11 12
///     16 13 14 15   ---->   13 14 15 16
/// ]
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut [u8; 16]) {
    // state is stored as columns: [c0, c0, c0, c0, c1, ... c1, c2, ... c2, ...]
    // for row,col of updated state, new value is at ((col + 4 - row) & 3) * 4 + row
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            let old_idx = ((col + 4 - row) & 3) * 4 + row;
            state[col * 4 + row] = s[old_idx];
        }
    }
}

/// Inverse MixColumns step. Each column is multiplied by a constant matrix in GF(2^8).
/// [ b0 ]      [ 14  11  13  09 ]  [ d0 ]
/// | b1 |  =   | 09  14  11  13 |  | d1 |
/// | b2 |      | 13  09  14  11 |  | d2 |
/// [ b3 ]      [ 11  13  09  14 ]  [ d3 ]
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (a, b, c, d) = (col[0] as usize, col[1] as usize, col[2] as usize, col[3] as usize);
        col[0] = MUL14[a] ^ MUL11[b] ^ MUL13[c] ^ MUL9[d];
        col[1] = MUL9[a] ^ MUL14[b] ^ MUL11[c] ^ MUL13[d];
        col[2] = MUL13[a] ^ MUL9[b] ^ MUL14[c] ^ MUL11[d];
        col[3] = MUL11[a] ^ MUL13[b] ^ MUL9[c] ^ MUL14[d];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aes128::core::{encrypt_block, encryption, expand_key};
    use crate::aes128::key::Key;

    const COUNTING: [u8; 16] = [
        // col 0
        0x00, 0x01, 0x02, 0x03,
        // col 1
        0x04, 0x05, 0x06, 0x07,
        // col 2
        0x08, 0x09, 0x0a, 0x0b,
        // col 3
        0x0c, 0x0d, 0x0e, 0x0f,
    ];

    #[test]
    fn test_shift_rows() {
        let mut actual = COUNTING;

        encryption::shift_rows(&mut actual);
        shift_rows_inv(&mut actual);

        assert_eq!(
            actual, COUNTING,
            "shift rows inverse does not exactly reverse shift rows"
        );
    }

    #[test]
    fn test_sub_bytes() {
        // every byte value passes through both boxes
        for chunk in 0..16u8 {
            let original: [u8; 16] = core::array::from_fn(|i| chunk * 16 + i as u8);
            let mut actual = original;

            encryption::sub_bytes(&mut actual);
            sub_bytes_inv(&mut actual);

            assert_eq!(
                actual, original,
                "sub bytes inverse does not exactly reverse sub bytes"
            );
        }
    }

    #[test]
    fn test_mix_columns() {
        let mut actual = COUNTING;

        encryption::mix_columns(&mut actual);
        mix_columns_inv(&mut actual);

        assert_eq!(
            actual, COUNTING,
            "mix columns inverse does not exactly reverse mix columns"
        );
    }

    #[test]
    fn test_mix_columns_inv_known_column() {
        // inverse of the first wikipedia test case
        let mut actual: [u8; 16] = [
            0x5d, 0xe0, 0x70, 0xbb, //
            0x9f, 0xdc, 0x58, 0x9d, //
            0x01, 0x01, 0x01, 0x01, //
            0xc6, 0xc6, 0xc6, 0xc6, //
        ];

        mix_columns_inv(&mut actual);

        assert_eq!(
            actual,
            [
                0x63, 0x47, 0xa2, 0xf0, //
                0xf2, 0x0a, 0x22, 0x5c, //
                0x01, 0x01, 0x01, 0x01, //
                0xc6, 0xc6, 0xc6, 0xc6, //
            ]
        );
    }

    #[test]
    fn test_decrypt_block_fips_c1() {
        // FIPS-197 Appendix C.1, inverse cipher
        let key = Key::from(core::array::from_fn(|i| i as u8));
        let ciphertext: [u8; 16] = [
            0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, //
            0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a, //
        ];
        let expected: [u8; 16] = core::array::from_fn(|i| (i as u8) * 0x11);

        let actual = decrypt_block(&ciphertext, &expand_key(&key));
        assert_eq!(actual, expected, "incorrect AES-128 decryption of block");
    }

    #[test]
    fn test_decrypt_block() {
        let key = Key::from([
            0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6, //
            0xAB, 0xF7, 0x15, 0x88, 0x09, 0xCF, 0x4F, 0x3C, //
        ]);

        let plaintext: [u8; 16] = [
            // col 0
            0x6B, 0xC1, 0xBE, 0xE2,
            // col 1
            0x2E, 0x40, 0x9F, 0x96,
            // col 2
            0xE9, 0x3D, 0x7E, 0x11,
            // col 3
            0x73, 0x93, 0x17, 0x2A,
        ];

        let round_keys = expand_key(&key);
        let encrypted = encrypt_block(&plaintext, &round_keys);
        let decrypted = decrypt_block(&encrypted, &round_keys);

        assert_eq!(
            decrypted, plaintext,
            "decrypt block does not exactly reverse encrypt block"
        );
    }
}
