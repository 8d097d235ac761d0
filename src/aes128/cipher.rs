use crate::aes128::core;
use crate::aes128::error::{Error, Result};
use crate::aes128::key::{ExpandedKey, Key};
use crate::aes128::modes::{ecb_core_dec, ecb_core_enc};

/// Expands a 16-byte key into 11 round keys (176 bytes).
///
/// Returns an [InvalidKeyLength](crate::Error::InvalidKeyLength) error if `key` is not exactly 16 bytes.
pub fn expand_key(key: &[u8]) -> Result<ExpandedKey> {
    Ok(core::expand_key(&Key::try_from_slice(key)?))
}

/// Encrypts a single 16-byte block with a 176-byte expanded key.
///
/// Both lengths are checked before any work is done: a block that is not 16 bytes returns
/// [InvalidBlockLength](crate::Error::InvalidBlockLength), an expanded key that is not 176 bytes returns
/// [InvalidExpandedKeyLength](crate::Error::InvalidExpandedKeyLength).
///
/// ## Examples
/// ```
/// # fn main() -> aes128::Result<()> {
/// let key: Vec<u8> = (0u8..16).collect();
/// let expanded = aes128::expand_key(&key)?;
///
/// let plaintext = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
///                  0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];
/// let ciphertext = aes128::encrypt_block(&plaintext, expanded.as_bytes())?;
/// assert_eq!(ciphertext, [0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30,
///                         0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a]);
///
/// assert_eq!(aes128::decrypt_block(&ciphertext, expanded.as_bytes())?, plaintext);
/// # Ok(())
/// # }
/// ```
pub fn encrypt_block(plaintext: &[u8], expanded_key: &[u8]) -> Result<[u8; 16]> {
    let block = to_block(plaintext)?;
    let round_keys = ExpandedKey::try_from_slice(expanded_key)?;
    Ok(core::encrypt_block(&block, &round_keys))
}

/// Decrypts a single 16-byte block with a 176-byte expanded key. Length checks match [encrypt_block].
pub fn decrypt_block(ciphertext: &[u8], expanded_key: &[u8]) -> Result<[u8; 16]> {
    let block = to_block(ciphertext)?;
    let round_keys = ExpandedKey::try_from_slice(expanded_key)?;
    Ok(core::decrypt_block(&block, &round_keys))
}

fn to_block(bytes: &[u8]) -> Result<[u8; 16]> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: bytes.len() })
}

/// Provides AES-128 single-block encryption and decryption, plus zero-padded
/// [ECB](crate::Cipher::encrypt_ecb) over whole messages.
/// Instantiated with a [Key], which is expanded into round keys and stored in the instance.
///
/// The instance is read-only after construction, so it can be shared across threads and used to
/// transform many blocks concurrently.
#[derive(Clone, Debug)]
pub struct Cipher {
    round_keys: ExpandedKey,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            round_keys: core::expand_key(key),
        }
    }

    /// Wraps round keys that were expanded earlier.
    pub fn from_expanded(round_keys: ExpandedKey) -> Self {
        Self { round_keys }
    }

    /// Getter for internal round keys.
    pub fn round_keys(&self) -> &ExpandedKey {
        &self.round_keys
    }

    /// Encrypts one 16-byte block.
    pub fn encrypt_block(&self, plaintext: &[u8; 16]) -> [u8; 16] {
        core::encrypt_block(plaintext, &self.round_keys)
    }

    /// Decrypts one 16-byte block.
    pub fn decrypt_block(&self, ciphertext: &[u8; 16]) -> [u8; 16] {
        core::decrypt_block(ciphertext, &self.round_keys)
    }

    /// **Electronic codebook** encryption.
    ///
    /// Zero pads the plaintext to the next multiple of 16 bytes (a full block of zeros is added when
    /// the length is already a multiple of 16), then encrypts each block entirely independently and
    /// chains them together. **Vulnerable to pattern emergence in the ciphertext.**
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Vec<u8> {
        ecb_core_enc(plaintext, &self.round_keys)
    }

    /// **Electronic codebook** decryption.
    ///
    /// Returns an [InvalidCiphertext](crate::Error::InvalidCiphertext) error unless the input is a
    /// non-empty multiple of 16 bytes. The zero padding is not removed or validated; use
    /// [strip_zero_padding](crate::strip_zero_padding) when the message is known not to end in zeros.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ecb_core_dec(ciphertext, &self.round_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aes128::modes::strip_zero_padding;

    #[test]
    fn boundary_rejects_bad_lengths() -> Result<()> {
        let expanded = expand_key(&[0u8; 16])?;

        assert!(matches!(
            expand_key(&[0u8; 15]),
            Err(Error::InvalidKeyLength { len: 15 })
        ));
        assert!(matches!(
            encrypt_block(&[0u8; 17], expanded.as_bytes()),
            Err(Error::InvalidBlockLength { len: 17 })
        ));
        assert!(matches!(
            decrypt_block(&[0u8; 8], expanded.as_bytes()),
            Err(Error::InvalidBlockLength { len: 8 })
        ));
        assert!(matches!(
            encrypt_block(&[0u8; 16], &expanded.as_bytes()[..160]),
            Err(Error::InvalidExpandedKeyLength { len: 160 })
        ));
        assert!(matches!(
            decrypt_block(&[0u8; 16], &[0u8; 192]),
            Err(Error::InvalidExpandedKeyLength { len: 192 })
        ));
        Ok(())
    }

    #[test]
    fn all_zero_boundary() -> Result<()> {
        let expanded = expand_key(&[0u8; 16])?;

        let ciphertext = encrypt_block(&[0u8; 16], expanded.as_bytes())?;
        assert_eq!(
            ciphertext,
            [
                0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, //
                0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34, 0x2b, 0x2e, //
            ]
        );
        assert_eq!(decrypt_block(&ciphertext, expanded.as_bytes())?, [0u8; 16]);
        Ok(())
    }

    #[test]
    fn facade_matches_free_functions() -> Result<()> {
        let key = Key::try_from_slice(&[0x3c; 16])?;
        let cipher = Cipher::new(&key);
        let block = [0xa7u8; 16];

        let via_free = encrypt_block(&block, cipher.round_keys().as_bytes())?;
        assert_eq!(cipher.encrypt_block(&block), via_free);
        assert_eq!(cipher.decrypt_block(&via_free), block);

        let reloaded = Cipher::from_expanded(ExpandedKey::try_from_slice(
            &cipher.round_keys().to_bytes(),
        )?);
        assert_eq!(reloaded.encrypt_block(&block), via_free);
        Ok(())
    }

    #[test]
    fn example_test() -> Result<()> {
        // generate a random 128-bit key.
        let key = Key::random()?;

        // instantiate a cipher object using that key.
        let cipher = Cipher::new(&key);

        // instantiate sample plaintext (cipher encrypts raw bytes).
        let plaintext = "Hello, World!".as_bytes();

        // encrypt the plaintext bytes using zero-padded ECB.
        let ciphertext = cipher.encrypt_ecb(plaintext);
        assert_eq!(ciphertext.len(), 16);

        // decrypt the resultant ciphertext and drop the padding.
        let decrypted = cipher.decrypt_ecb(&ciphertext)?;
        assert_eq!(plaintext, strip_zero_padding(&decrypted));
        Ok(())
    }
}
