//! Hex text encoding for ciphertext and key files.

use std::fmt::Write;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),

    #[error("invalid hex byte {0:?}")]
    InvalidByte(String),

    #[error("key file holds {0} bytes (expected 16)")]
    KeyLength(usize),
}

/// Lowercase hex, two digits per byte, no separators.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // writing to a String cannot fail
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// Decodes a continuous hex string. Whitespace (including line breaks) is ignored.
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();

    if digits.len() % 2 == 1 {
        return Err(HexError::OddLength(digits.len()));
    }

    digits
        .chunks_exact(2)
        .map(|pair| parse_byte(&String::from_utf8_lossy(pair)))
        .collect()
}

// from_str_radix alone would also accept a leading '+'
fn parse_byte(token: &str) -> Result<u8, HexError> {
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidByte(token.to_string()));
    }
    u8::from_str_radix(token, 16).map_err(|_| HexError::InvalidByte(token.to_string()))
}

/// Parses a key file. Accepts either one continuous 32-digit token or whitespace-separated byte
/// tokens of one or two digits each ("2b 7e 15 ...").
pub fn decode_key(s: &str) -> Result<[u8; 16], HexError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();

    let bytes = if tokens.len() == 1 {
        decode(tokens[0])?
    } else {
        tokens
            .iter()
            .map(|t| parse_byte(t))
            .collect::<Result<Vec<u8>, _>>()?
    };

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| HexError::KeyLength(bytes.len()))
}

/// Key file representation: 16 space-separated byte tokens.
pub fn encode_key(key: &[u8; 16]) -> String {
    key.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
