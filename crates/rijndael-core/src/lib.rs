//! Rijndael (AES) single-block cipher following FIPS-197.
//!
//! This crate provides:
//! - GF(2^8) arithmetic and the S-box tables.
//! - Key expansion for 128, 192 and 256-bit keys.
//! - Single-block encryption and decryption, with an optional observer that
//!   sees every intermediate state.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened. Modes of
//! operation are left to callers.
//!
//! ```
//! use rijndael_core::{decrypt_block, encrypt_block};
//!
//! let key: Vec<u8> = (0u8..16).collect();
//! let plain = *b"sixteen byte msg";
//! let ct = encrypt_block(&plain, &key).unwrap();
//! assert_ne!(ct, plain);
//! assert_eq!(decrypt_block(&ct, &key).unwrap(), plain);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
mod schedule;
mod state;
mod trace;

pub use crate::block::{block_from_slice, Block, BLOCK_SIZE};
pub use crate::cipher::{
    cipher, cipher_with, decipher, decipher_with, decrypt_block, encrypt_block, Rijndael,
};
pub use crate::error::{Error, Result};
pub use crate::gf::{ff_add, ff_multiply, xtime, REDUCTION_POLY};
pub use crate::key::{CipherKey, KeySize, MAX_KEY_BYTES, NB};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inv_sbox_sub, inv_sub_word, sbox_sub, sub_word};
pub use crate::schedule::{
    expand_key, init_rcon, rot_word, KeySchedule, MAX_ROUNDS, MAX_SCHEDULE_WORDS,
};
pub use crate::state::State;
pub use crate::trace::{Direction, RoundObserver, Step, TraceLine, TraceRecorder};
