//! AES-128 block cipher: key expansion plus single-block encryption and decryption over fixed
//! 16-byte blocks, with a zero-padded ECB helper for whole messages.
//!
//! ## Examples
//! ```
//! # fn main() -> aes128::Result<()> {
//! use aes128::{Cipher, Key};
//!
//! let key = Key::random()?;
//! let cipher = Cipher::new(&key);
//!
//! let block = *b"sixteen byte msg";
//! let ciphertext = cipher.encrypt_block(&block);
//! assert_eq!(cipher.decrypt_block(&ciphertext), block);
//! # Ok(())
//! # }
//! ```

mod aes128;

pub use aes128::{
    Cipher, EXPANDED_KEY_LEN, Error, ExpandedKey, Key, PARALLEL_THRESHOLD, Result, decrypt_block,
    encrypt_block, expand_key, strip_zero_padding,
};
