//! AES round transformations.

use crate::gf::{ff_add, ff_multiply};
use crate::key::NB;
use crate::sbox::{inv_sbox_sub, sbox_sub};
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox_sub(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sbox_sub(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        state.row_mut(row).rotate_left(row);
    }
}

/// Rotates row `r` right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..4 {
        state.row_mut(row).rotate_right(row);
    }
}

/// Multiplies `col` by the circulant matrix whose first row is `coeffs`.
fn mix_single_column(col: [u8; 4], coeffs: [u8; 4]) -> [u8; 4] {
    core::array::from_fn(|row| {
        (0..4).fold(0u8, |acc, k| {
            ff_add(acc, ff_multiply(coeffs[(k + 4 - row) % 4], col[k]))
        })
    })
}

const MIX: [u8; 4] = [0x02, 0x03, 0x01, 0x01];
const INV_MIX: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..NB {
        let mixed = mix_single_column(state.column(col), MIX);
        state.set_column(col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..NB {
        let mixed = mix_single_column(state.column(col), INV_MIX);
        state.set_column(col, mixed);
    }
}

/// XORs each state column with the matching round-key word.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &[u32; NB]) {
    for (col, word) in round_key.iter().enumerate() {
        let mixed = state.column_word(col) ^ word;
        state.set_column_word(col, mixed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn state_from_hex(s: &str) -> State {
        let bytes: Block = hex::decode(s).unwrap().try_into().unwrap();
        State::from_block(&bytes)
    }

    fn hex_of(state: &State) -> String {
        hex::encode(state.to_block())
    }

    // Intermediate values from FIPS-197 Appendix C.1, round 1.
    #[test]
    fn forward_steps_match_appendix_c1() {
        let mut state = state_from_hex("00102030405060708090a0b0c0d0e0f0");
        sub_bytes(&mut state);
        assert_eq!(hex_of(&state), "63cab7040953d051cd60e0e7ba70e18c");
        shift_rows(&mut state);
        assert_eq!(hex_of(&state), "6353e08c0960e104cd70b751bacad0e7");
        mix_columns(&mut state);
        assert_eq!(hex_of(&state), "5f72641557f5bc92f7be3b291db9f91a");
        add_round_key(
            &mut state,
            &[0xd6aa74fd, 0xd2af72fa, 0xdaa678f1, 0xd6ab76fe],
        );
        assert_eq!(hex_of(&state), "89d810e8855ace682d1843d8cb128fe4");
    }

    #[test]
    fn mix_columns_known_column() {
        let mut state = State::default();
        state.set_column(0, [0xdb, 0x13, 0x53, 0x45]);
        mix_columns(&mut state);
        assert_eq!(state.column(0), [0x8e, 0x4d, 0xa1, 0xbc]);
        inv_mix_columns(&mut state);
        assert_eq!(state.column(0), [0xdb, 0x13, 0x53, 0x45]);
    }

    #[test]
    fn shift_rows_moves_bytes() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let mut state = State::from_block(&block);
        shift_rows(&mut state);
        assert_eq!(
            state.to_block(),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
        inv_shift_rows(&mut state);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn inverse_transforms_undo_forward_ones() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..64 {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            let original = State::from_block(&block);

            let mut state = original;
            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state, original);

            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);

            let key = [rng.next_u32(), rng.next_u32(), rng.next_u32(), rng.next_u32()];
            add_round_key(&mut state, &key);
            add_round_key(&mut state, &key);
            assert_eq!(state, original);
        }
    }
}
