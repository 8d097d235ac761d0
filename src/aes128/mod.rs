mod cipher;
mod core;
mod error;
mod key;
mod modes;

pub use cipher::{Cipher, decrypt_block, encrypt_block, expand_key};
pub use error::{Error, Result};
pub use key::{EXPANDED_KEY_LEN, ExpandedKey, Key};
pub use modes::{PARALLEL_THRESHOLD, strip_zero_padding};
