//! Input validation errors.

use thiserror::Error;

/// Result alias for cipher operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised before any block transformation starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The cipher key is not 16, 24 or 32 bytes long.
    #[error("invalid key length: {len} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength {
        /// Length of the rejected key.
        len: usize,
    },

    /// The input block is not exactly 16 bytes long.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidBlockLength {
        /// Length of the rejected block.
        len: usize,
    },
}
