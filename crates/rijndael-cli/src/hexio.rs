//! Hex parsing for keys and blocks given on the command line.

use anyhow::{Context, Result};
use rijndael_core::{block_from_slice, Block, CipherKey};

/// Decodes hex, ignoring an optional `0x` prefix and any whitespace.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).with_context(|| format!("decode hex {input:?}"))
}

/// Parses a 16, 24 or 32 byte key.
pub fn parse_key_hex(input: &str) -> Result<CipherKey> {
    let bytes = decode_hex(input).context("decode key hex")?;
    CipherKey::new(&bytes).context("key must be 32, 48 or 64 hex characters")
}

/// Parses a single 16-byte block.
pub fn parse_block_hex(input: &str) -> Result<Block> {
    let bytes = decode_hex(input).context("decode block hex")?;
    block_from_slice(&bytes).context("block must be 32 hex characters")
}
