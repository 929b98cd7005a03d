//! Game configuration
//!
//! Collected from the command line; the library itself reads no environment
//! or config files.

use crate::core::{Board, BoardError};
use crate::dictionary::FrequencyTable;
use crate::engine::BoardGenerator;

/// Default board side length
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Board settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub seed: Option<u64>,
    /// Fixed board to play instead of generated ones
    pub board: Option<Board>,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: None,
            board: None,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_board(mut self, board: Option<Board>) -> Self {
        self.board = board;
        self
    }

    /// Generator honouring the configured seed
    #[must_use]
    pub fn generator(&self) -> BoardGenerator {
        BoardGenerator::new(self.seed)
    }

    /// The fixed board if one was given, otherwise a freshly generated one
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the configured size cannot be generated.
    pub fn first_board(
        &self,
        generator: &mut BoardGenerator,
        weights: &FrequencyTable,
    ) -> Result<Board, BoardError> {
        match &self.board {
            Some(board) => Ok(board.clone()),
            None => generator.generate(self.size, weights),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryIndex;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.size, DEFAULT_BOARD_SIZE);
        assert!(config.seed.is_none());
        assert!(config.board.is_none());
    }

    #[test]
    fn fixed_board_wins_over_generation() {
        let index = DictionaryIndex::build(["apple"]).unwrap();
        let board: Board = "ab/cd".parse().unwrap();
        let config = GameConfig::new().with_size(7).with_board(Some(board.clone()));
        let mut generator = config.generator();
        assert_eq!(config.first_board(&mut generator, index.frequencies()), Ok(board));
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let index = DictionaryIndex::build(["apple", "stone"]).unwrap();
        let config = GameConfig::new().with_size(4).with_seed(Some(11));
        let a = config.first_board(&mut config.generator(), index.frequencies());
        let b = config.first_board(&mut config.generator(), index.frequencies());
        assert_eq!(a, b);
        assert_eq!(a.unwrap().size(), 4);
    }
}
