//! Key expansion for all three key sizes.

use tracing::debug;

use crate::error::Result;
use crate::gf::xtime;
use crate::key::{CipherKey, KeySize, NB};
use crate::sbox::sub_word;

/// Largest schedule, for AES-256: `Nb * (14 + 1)` words.
pub const MAX_SCHEDULE_WORDS: usize = 60;

/// Largest round count.
pub const MAX_ROUNDS: usize = 14;

/// Cyclic byte rotation `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
#[inline]
pub fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Builds the round constants `{rc_i, 00, 00, 00}` for `nr` rounds.
///
/// Only the first `nr` entries are populated; `nr` is clamped to
/// [`MAX_ROUNDS`].
pub fn init_rcon(nr: usize) -> [u32; MAX_ROUNDS] {
    let mut rcon = [0u32; MAX_ROUNDS];
    let mut rc = 0x01u8;
    for slot in rcon.iter_mut().take(nr) {
        *slot = u32::from(rc) << 24;
        rc = xtime(rc);
    }
    rcon
}

/// Expanded round-key words for one cipher key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeySchedule {
    words: [u32; MAX_SCHEDULE_WORDS],
    size: KeySize,
}

impl KeySchedule {
    /// Expands an already validated key.
    pub fn expand(key: &CipherKey) -> Self {
        let size = key.size();
        let nk = size.nk();
        let total = size.schedule_words();
        let rcon = init_rcon(size.nr());

        let mut w = [0u32; MAX_SCHEDULE_WORDS];
        for (slot, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
            *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in nk..total {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp)) ^ rcon[i / nk - 1];
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            w[i] = w[i - nk] ^ temp;
        }

        debug!(
            key_bits = size.bits(),
            rounds = size.nr(),
            words = total,
            "expanded key schedule"
        );

        Self { words: w, size }
    }

    /// Key size the schedule was derived from.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds the schedule covers.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    /// All `Nb * (Nr + 1)` schedule words.
    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words[..self.size.schedule_words()]
    }

    /// The four words used by `round` (0..=Nr).
    ///
    /// # Panics
    ///
    /// Panics if `round > self.rounds()`.
    #[inline]
    pub fn round_key(&self, round: usize) -> [u32; NB] {
        assert!(round <= self.rounds(), "round {round} out of range");
        let offset = round * NB;
        [
            self.words[offset],
            self.words[offset + 1],
            self.words[offset + 2],
            self.words[offset + 3],
        ]
    }

    /// Round key for `round` as 16 big-endian bytes.
    pub fn round_key_bytes(&self, round: usize) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.round_key(round)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl core::fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeySchedule")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Validates `key` and expands it into a key schedule.
pub fn expand_key(key: &[u8]) -> Result<KeySchedule> {
    let key = CipherKey::new(key)?;
    Ok(KeySchedule::expand(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn key_from_hex(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    #[test]
    fn rot_word_rotates_bytes() {
        assert_eq!(rot_word(0x09cf4f3c), 0xcf4f3c09);
        assert_eq!(rot_word(0x00000001), 0x00000100);
    }

    #[test]
    fn rcon_sequence() {
        let rcon = init_rcon(10);
        assert_eq!(
            rcon[..10],
            [
                0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000,
                0x40000000, 0x80000000, 0x1b000000, 0x36000000,
            ]
        );
        assert_eq!(rcon[10..], [0; 4]);
        assert_eq!(init_rcon(14)[13], 0x4d000000);
    }

    #[test]
    fn aes128_expansion_matches_fips197_a1() {
        let schedule = expand_key(&key_from_hex("2b7e151628aed2a6abf7158809cf4f3c")).unwrap();
        let w = schedule.words();
        assert_eq!(w.len(), 44);
        assert_eq!(w[0], 0x2b7e1516);
        assert_eq!(w[4], 0xa0fafe17);
        assert_eq!(w[5], 0x88542cb1);
        assert_eq!(w[43], 0xb6630ca6);
    }

    #[test]
    fn aes192_expansion_matches_fips197_a2() {
        let schedule =
            expand_key(&key_from_hex("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b")).unwrap();
        let w = schedule.words();
        assert_eq!(w.len(), 52);
        assert_eq!(w[6], 0xfe0c91f7);
        assert_eq!(w[51], 0x01002202);
    }

    #[test]
    fn aes256_expansion_matches_fips197_a3() {
        let schedule = expand_key(&key_from_hex(
            "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        ))
        .unwrap();
        let w = schedule.words();
        assert_eq!(w.len(), 60);
        assert_eq!(w[8], 0x9ba35411);
        assert_eq!(w[12], 0xa8b09c1a);
        assert_eq!(w[59], 0x706c631e);
    }

    #[test]
    fn round_key_slices_schedule() {
        let schedule = expand_key(&key_from_hex("000102030405060708090a0b0c0d0e0f")).unwrap();
        assert_eq!(
            schedule.round_key(0),
            [0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f]
        );
        assert_eq!(
            hex::encode(schedule.round_key_bytes(10)),
            "13111d7fe3944a17f307a78b4d2b30c5"
        );
    }

    #[test]
    fn rejects_bad_key_lengths() {
        assert_eq!(
            expand_key(&[0u8; 20]).unwrap_err(),
            Error::InvalidKeyLength { len: 20 }
        );
    }

    #[test]
    fn expansion_is_deterministic() {
        let key = [0x42u8; 24];
        assert_eq!(expand_key(&key).unwrap(), expand_key(&key).unwrap());
    }
}
