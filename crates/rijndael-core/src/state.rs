//! The 4x4 state grid.

use crate::block::{Block, BLOCK_SIZE};
use crate::key::NB;

/// Cipher state, indexed `[row][column]`.
///
/// Input byte `i` lands in row `i % 4`, column `i / 4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub [[u8; NB]; 4]);

impl State {
    /// Loads a block column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut grid = [[0u8; NB]; 4];
        for (i, byte) in block.iter().enumerate() {
            grid[i % 4][i / 4] = *byte;
        }
        Self(grid)
    }

    /// Serializes the grid column by column.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.0[i % 4][i / 4];
        }
        block
    }

    /// Column `col` as a big-endian word (row 0 is the top byte).
    #[inline]
    pub fn column_word(&self, col: usize) -> u32 {
        u32::from_be_bytes(self.column(col))
    }

    /// Overwrites column `col` with the bytes of a big-endian word.
    #[inline]
    pub fn set_column_word(&mut self, col: usize, word: u32) {
        self.set_column(col, word.to_be_bytes());
    }

    /// Column `col`, top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    /// Overwrites column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.0[row][col] = byte;
        }
    }

    /// Mutable access to row `row`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8; NB] {
        &mut self.0[row]
    }

    /// Iterates over every byte of the grid.
    pub fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.0.iter_mut().flat_map(|row| row.iter_mut())
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}
