//! Core AES-128 implementation: key schedule plus encryption and decryption of a single 16 byte block.

pub(crate) mod constants;
mod decryption;
mod encryption;
mod key_schedule;
mod util;

/// Number of rounds for a 128-bit key.
pub(crate) const NUM_ROUNDS: usize = 10;
/// Round keys produced by the schedule (one more than the number of rounds).
pub(crate) const NUM_ROUND_KEYS: usize = NUM_ROUNDS + 1;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
pub use key_schedule::expand_key;
