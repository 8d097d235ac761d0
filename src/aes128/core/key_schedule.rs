use log::trace;

use super::constants::{RCON, SBOX};
use super::util::xor_words;
use super::{NUM_ROUND_KEYS, NUM_ROUNDS};
use crate::aes128::key::{ExpandedKey, Key};

// Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
// Nk   The number of 32-bit words comprising the key
// Nw   The total number of words generated by the key schedule (including initial key)
const NK: usize = 4;
const NW: usize = (NUM_ROUNDS + 1) * 4;

/// Cyclic left rotation of a word by one byte: [a0, a1, a2, a3] -> [a1, a2, a3, a0].
#[inline(always)]
fn rot_word(word: [u8; 4]) -> [u8; 4] {
    [word[1], word[2], word[3], word[0]]
}

/// Applies the SBOX to each byte of a word.
#[inline(always)]
fn sub_word(word: [u8; 4]) -> [u8; 4] {
    word.map(|b| SBOX[b as usize])
}

/// AES-128 key schedule. Expands the 16 byte key into 11 round keys (176 bytes), the first of
/// which is the original key.
pub fn expand_key(key: &Key) -> ExpandedKey {
    let key = key.as_bytes();

    // w comprises the 4-byte words of the round keys
    let mut w = [[0u8; 4]; NW];

    // first nk words of w are filled with the initial key
    for (i, byte) in key.iter().enumerate() {
        w[i / 4][i % 4] = *byte;
    }

    for i in NK..NW {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / NK];
        }

        // w[i] = temp ⊕ w[i − Nk]
        w[i] = xor_words(&temp, &w[i - NK]);
    }

    // words are laid out column by column, matching the column-major state
    let mut round_keys = [[0u8; 16]; NUM_ROUND_KEYS];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for col in 0..4 {
            round_key[col * 4..col * 4 + 4].copy_from_slice(&w[round * 4 + col]);
        }
    }

    trace!("expanded 128-bit key into {} round keys", NUM_ROUND_KEYS);
    ExpandedKey::from_round_keys(round_keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rot_and_sub_word() {
        // FIPS-197 Appendix A.1, i = 4
        let temp = [0x09, 0xcf, 0x4f, 0x3c];
        let rotated = rot_word(temp);
        assert_eq!(rotated, [0xcf, 0x4f, 0x3c, 0x09]);
        assert_eq!(sub_word(rotated), [0x8a, 0x84, 0xeb, 0x01]);
    }

    #[test]
    fn key_schedule_fips_a1() {
        // run key schedule on 128 bit sample key from FIPS-197 Appendix A.1
        let key = Key::from([
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ]);
        let ek = expand_key(&key);

        // round key 0 is the key itself
        assert_eq!(ek.round_key(0), key.as_bytes());

        // w[4..8] from the sample schedule in A.1
        let first: [u8; 16] = [
            0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
            0x76, 0x05,
        ];
        assert_eq!(ek.round_key(1), &first);

        // compare with last round key of sample schedule in A.1
        let last: [u8; 16] = [
            0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
            0x0c, 0xa6,
        ];
        assert_eq!(ek.round_key(10), &last);
    }

    #[test]
    fn key_schedule_fips_c1() {
        // FIPS-197 Appendix C.1, round[10].k_sch
        let key = Key::from(core::array::from_fn(|i| i as u8));
        let ek = expand_key(&key);

        let expected: [u8; 16] = [
            0x13, 0x11, 0x1d, 0x7f, 0xe3, 0x94, 0x4a, 0x17, 0xf3, 0x07, 0xa7, 0x8b, 0x4d, 0x2b,
            0x30, 0xc5,
        ];
        assert_eq!(ek.round_key(10), &expected);
    }

    #[test]
    fn key_schedule_is_deterministic() {
        let key = Key::from([0x5a; 16]);
        assert_eq!(expand_key(&key), expand_key(&key));
        assert_eq!(expand_key(&key).as_bytes().len(), 176);
    }
}
