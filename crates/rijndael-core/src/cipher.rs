//! Forward and inverse round engines and the block-level entry points.

use tracing::trace;

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::{CipherKey, KeySize};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::KeySchedule;
use crate::state::State;
use crate::trace::{Direction, RoundObserver, Step};

fn report<O: RoundObserver>(
    observer: &mut O,
    direction: Direction,
    round: usize,
    step: Step,
    state: &State,
) {
    observer.observe(direction, round, step, &state.to_block());
}

/// Encrypts one block with a pre-expanded schedule.
pub fn cipher(block: &Block, schedule: &KeySchedule) -> Block {
    cipher_with(block, schedule, &mut ())
}

/// Encrypts one block, reporting every intermediate state to `observer`.
pub fn cipher_with<O: RoundObserver>(
    block: &Block,
    schedule: &KeySchedule,
    observer: &mut O,
) -> Block {
    const DIR: Direction = Direction::Encrypt;
    let nr = schedule.rounds();
    trace!(rounds = nr, "cipher");

    let mut state = State::from_block(block);
    report(observer, DIR, 0, Step::Input, &state);
    observer.observe(DIR, 0, Step::RoundKey, &schedule.round_key_bytes(0));
    add_round_key(&mut state, &schedule.round_key(0));

    for round in 1..=nr {
        report(observer, DIR, round, Step::Start, &state);
        sub_bytes(&mut state);
        report(observer, DIR, round, Step::SubBytes, &state);
        shift_rows(&mut state);
        report(observer, DIR, round, Step::ShiftRows, &state);
        if round < nr {
            mix_columns(&mut state);
            report(observer, DIR, round, Step::MixColumns, &state);
        }
        observer.observe(DIR, round, Step::RoundKey, &schedule.round_key_bytes(round));
        add_round_key(&mut state, &schedule.round_key(round));
    }

    report(observer, DIR, nr, Step::Output, &state);
    state.to_block()
}

/// Decrypts one block with a pre-expanded schedule.
pub fn decipher(block: &Block, schedule: &KeySchedule) -> Block {
    decipher_with(block, schedule, &mut ())
}

/// Decrypts one block, reporting every intermediate state to `observer`.
///
/// Rounds are numbered from the start of the inverse cipher, so round `r`
/// consumes the round key of forward round `Nr - r`.
pub fn decipher_with<O: RoundObserver>(
    block: &Block,
    schedule: &KeySchedule,
    observer: &mut O,
) -> Block {
    const DIR: Direction = Direction::Decrypt;
    let nr = schedule.rounds();
    trace!(rounds = nr, "decipher");

    let mut state = State::from_block(block);
    report(observer, DIR, 0, Step::Input, &state);
    observer.observe(DIR, 0, Step::RoundKey, &schedule.round_key_bytes(nr));
    add_round_key(&mut state, &schedule.round_key(nr));

    for round in 1..=nr {
        let key_round = nr - round;
        report(observer, DIR, round, Step::Start, &state);
        inv_shift_rows(&mut state);
        report(observer, DIR, round, Step::ShiftRows, &state);
        inv_sub_bytes(&mut state);
        report(observer, DIR, round, Step::SubBytes, &state);
        observer.observe(
            DIR,
            round,
            Step::RoundKey,
            &schedule.round_key_bytes(key_round),
        );
        add_round_key(&mut state, &schedule.round_key(key_round));
        // the final round's state is reported as the output instead
        if round < nr {
            report(observer, DIR, round, Step::AddRoundKey, &state);
            inv_mix_columns(&mut state);
        }
    }

    report(observer, DIR, nr, Step::Output, &state);
    state.to_block()
}

/// Encrypts a 16-byte block under a 16, 24 or 32 byte key.
///
/// The key schedule is derived afresh on every call; use [`Rijndael`] to
/// reuse it across blocks.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let key = CipherKey::new(key)?;
    let block = block_from_slice(plaintext)?;
    Ok(cipher(&block, &KeySchedule::expand(&key)))
}

/// Decrypts a 16-byte block under a 16, 24 or 32 byte key.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let key = CipherKey::new(key)?;
    let block = block_from_slice(ciphertext)?;
    Ok(decipher(&block, &KeySchedule::expand(&key)))
}

/// A cipher bound to one expanded key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rijndael {
    schedule: KeySchedule,
}

impl Rijndael {
    /// Validates `key` and expands its schedule.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self::from_key(&CipherKey::new(key)?))
    }

    /// Expands the schedule of an already validated key.
    pub fn from_key(key: &CipherKey) -> Self {
        Self {
            schedule: KeySchedule::expand(key),
        }
    }

    /// Key size in use.
    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Number of rounds per block.
    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// The expanded key schedule.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        cipher(block, &self.schedule)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decipher(block, &self.schedule)
    }

    /// Encrypts one block while reporting intermediate states.
    pub fn encrypt_block_with<O: RoundObserver>(&self, block: &Block, observer: &mut O) -> Block {
        cipher_with(block, &self.schedule, observer)
    }

    /// Decrypts one block while reporting intermediate states.
    pub fn decrypt_block_with<O: RoundObserver>(&self, block: &Block, observer: &mut O) -> Block {
        decipher_with(block, &self.schedule, observer)
    }
}

impl From<CipherKey> for Rijndael {
    fn from(key: CipherKey) -> Self {
        Self::from_key(&key)
    }
}
