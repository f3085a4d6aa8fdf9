//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of a cipher block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Copies `bytes` into a [`Block`], rejecting any other length.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    if bytes.len() != BLOCK_SIZE {
        return Err(Error::InvalidBlockLength { len: bytes.len() });
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(bytes);
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_length() {
        let bytes: Vec<u8> = (0u8..16).collect();
        let block = block_from_slice(&bytes).unwrap();
        assert_eq!(&block[..], &bytes[..]);
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0usize, 1, 15, 17, 32] {
            let bytes = vec![0u8; len];
            assert_eq!(
                block_from_slice(&bytes),
                Err(Error::InvalidBlockLength { len })
            );
        }
    }
}
