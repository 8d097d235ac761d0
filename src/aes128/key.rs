//! Defines the [`Key`] struct, which holds a valid 128-bit AES key, and the [`ExpandedKey`] struct, which
//! holds the 11 round keys derived from it by the key schedule.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::aes128::core::NUM_ROUND_KEYS;
use crate::aes128::error::{Error, Result};

/// Length of an expanded AES-128 key in bytes (11 round keys of 16 bytes).
pub const EXPANDED_KEY_LEN: usize = NUM_ROUND_KEYS * 16;

/// Contains a valid AES-128 key. Can be instantiated with a random key, or built from a slice
/// of exactly 16 bytes.
/// A `Key` is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> aes128::Result<()> {
/// use aes128::Key;
///
/// // Instantiate a random key:
/// let rk = Key::random()?;
/// assert_eq!(rk.as_bytes().len(), 16);
///
/// // Instantiate a key from a slice:
/// let key_bytes: [u8; 16] = [0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6,
///                            0xAB, 0xF7, 0x15, 0x88, 0x09, 0xCF, 0x4F, 0x3C];
/// let my_key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(my_key.as_bytes(), &key_bytes);
///
/// // Anything other than 16 bytes returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..15]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: [u8; 16],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn random() -> Result<Self> {
        let mut k = [0u8; 16];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self { bytes: k })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }
}

impl From<[u8; 16]> for Key {
    fn from(bytes: [u8; 16]) -> Self {
        Self { bytes }
    }
}

/// The output of the AES-128 key schedule: 11 consecutive round keys. Round key `i` occupies
/// bytes `[16 * i, 16 * i + 16)` of the flat 176-byte representation.
///
/// Produced by [expand_key](crate::expand_key) or loaded from a previously exported buffer with
/// [try_from_slice](ExpandedKey::try_from_slice).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ExpandedKey {
    round_keys: [[u8; 16]; NUM_ROUND_KEYS],
}

impl ExpandedKey {
    pub(crate) fn from_round_keys(round_keys: [[u8; 16]; NUM_ROUND_KEYS]) -> Self {
        Self { round_keys }
    }

    /// Attempts to load an expanded key from a flat buffer. Will return an InvalidExpandedKeyLength
    /// error if the buffer is anything other than 176 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != EXPANDED_KEY_LEN {
            return Err(Error::InvalidExpandedKeyLength { len: bytes.len() });
        }

        let mut round_keys = [[0u8; 16]; NUM_ROUND_KEYS];
        for (rk, chunk) in round_keys.iter_mut().zip(bytes.chunks_exact(16)) {
            rk.copy_from_slice(chunk);
        }
        Ok(Self { round_keys })
    }

    /// Round key `round` (0..=10).
    #[inline(always)]
    pub fn round_key(&self, round: usize) -> &[u8; 16] {
        &self.round_keys[round]
    }

    /// All round keys, in schedule order.
    pub fn round_keys(&self) -> &[[u8; 16]; NUM_ROUND_KEYS] {
        &self.round_keys
    }

    /// Flat 176-byte view of the round keys.
    pub fn as_bytes(&self) -> &[u8] {
        self.round_keys.as_flattened()
    }

    /// Copies the round keys into a flat 176-byte array.
    pub fn to_bytes(&self) -> [u8; EXPANDED_KEY_LEN] {
        let mut out = [0u8; EXPANDED_KEY_LEN];
        out.copy_from_slice(self.as_bytes());
        out
    }
}
