use thiserror::Error;
use rand::rand_core;

/// AES-128 Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES-128 Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to build a key from a slice that is not exactly 16 bytes.
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength { len: usize },

    /// Attempted to encrypt or decrypt a single block that is not exactly 16 bytes.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidBlockLength { len: usize },

    /// Attempted to load an expanded key that is not exactly 176 bytes (11 round keys).
    #[error("invalid expanded key length: {len} bytes (expected 176)")]
    InvalidExpandedKeyLength { len: usize },

    /// Provided ciphertext that cannot be split into whole 16-byte blocks.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
