//! Cipher key types for AES-128, AES-192 and AES-256.

use crate::error::{Error, Result};

/// Number of 32-bit columns in the state.
pub const NB: usize = 4;

/// Longest supported key, in bytes.
pub const MAX_KEY_BYTES: usize = 32;

/// Supported key sizes and the round parameters they select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, `Nk = 4`, `Nr = 10`.
    Aes128,
    /// 192-bit key, `Nk = 6`, `Nr = 12`.
    Aes192,
    /// 256-bit key, `Nk = 8`, `Nr = 14`.
    Aes256,
}

impl KeySize {
    /// All sizes, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Maps a key length in bytes to its size.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            _ => Err(Error::InvalidKeyLength { len }),
        }
    }

    /// Key length in bytes.
    pub const fn bytes(self) -> usize {
        self.nk() * 4
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Length of the expanded key schedule in words, `Nb * (Nr + 1)`.
    pub const fn schedule_words(self) -> usize {
        NB * (self.nr() + 1)
    }
}

/// A validated cipher key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CipherKey {
    bytes: [u8; MAX_KEY_BYTES],
    size: KeySize,
}

impl CipherKey {
    /// Validates `bytes` as a 16, 24 or 32 byte key.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let size = KeySize::from_len(bytes.len())?;
        let mut buf = [0u8; MAX_KEY_BYTES];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { bytes: buf, size })
    }

    /// Size class of the key.
    #[inline]
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.bytes()]
    }
}

impl core::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // key material stays out of logs
        f.debug_struct("CipherKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl From<[u8; 16]> for CipherKey {
    fn from(value: [u8; 16]) -> Self {
        let mut bytes = [0u8; MAX_KEY_BYTES];
        bytes[..16].copy_from_slice(&value);
        Self {
            bytes,
            size: KeySize::Aes128,
        }
    }
}

impl From<[u8; 24]> for CipherKey {
    fn from(value: [u8; 24]) -> Self {
        let mut bytes = [0u8; MAX_KEY_BYTES];
        bytes[..24].copy_from_slice(&value);
        Self {
            bytes,
            size: KeySize::Aes192,
        }
    }
}

impl From<[u8; 32]> for CipherKey {
    fn from(value: [u8; 32]) -> Self {
        Self {
            bytes: value,
            size: KeySize::Aes256,
        }
    }
}

impl TryFrom<&[u8]> for CipherKey {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::new(value)
    }
}
