//! Random board generation
//!
//! Cells are sampled independently, with replacement, weighted by how often
//! each letter occurs in the dictionary.

use crate::core::{ALPHABET, Board, BoardError};
use crate::dictionary::FrequencyTable;
use log::debug;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;

/// Frequency-weighted board generator
///
/// Seeded generators are fully deterministic: the same seed, size and table
/// always produce the same sequence of boards.
pub struct BoardGenerator {
    rng: StdRng,
}

impl BoardGenerator {
    /// Create a generator, seeded for reproducible boards or from OS entropy
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { rng }
    }

    /// Generate a `size`×`size` board
    ///
    /// # Errors
    /// - `BoardError::InvalidSize` if `size` is 0 or `size * size` overflows
    /// - `BoardError::Weights` if the table has no letter with positive weight
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::DictionaryIndex;
    /// use boggle_solver::engine::BoardGenerator;
    ///
    /// let index = DictionaryIndex::build(["apple", "stone"]).unwrap();
    /// let a = BoardGenerator::new(Some(7)).generate(4, index.frequencies()).unwrap();
    /// let b = BoardGenerator::new(Some(7)).generate(4, index.frequencies()).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn generate(&mut self, size: usize, weights: &FrequencyTable) -> Result<Board, BoardError> {
        let cell_count = Board::cell_count_for(size)?;

        let dist = WeightedIndex::new(weights.weights().iter().copied())
            .map_err(|e| BoardError::Weights(e.to_string()))?;

        let cells = (0..cell_count)
            .map(|_| ALPHABET[dist.sample(&mut self.rng)])
            .collect();

        let board = Board::new(size, cells)?;
        debug!("generated board {board}");
        Ok(board)
    }
}
