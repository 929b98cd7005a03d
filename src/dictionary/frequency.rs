//! Letter frequency table
//!
//! Relative letter frequencies across the whole corpus, used only to bias board
//! generation towards letters that actually occur in dictionary words.

use crate::core::{ALPHABET, ALPHABET_SIZE, Letter};
use rustc_hash::FxHashMap;

/// Letter -> relative frequency, summing to 1 over the observed letters
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    weights: [f64; ALPHABET_SIZE],
    total: usize,
}

impl FrequencyTable {
    /// Normalize raw occurrence counts by their total
    ///
    /// Letters absent from `counts` get weight 0. An empty tally gives an
    /// all-zero table, which the board generator refuses to sample from.
    #[must_use]
    pub fn from_counts(counts: &FxHashMap<Letter, usize>) -> Self {
        let total: usize = counts.values().sum();
        let mut weights = [0.0; ALPHABET_SIZE];

        if total > 0 {
            for (&letter, &count) in counts {
                weights[letter.index()] = count as f64 / total as f64;
            }
        }

        Self { weights, total }
    }

    /// Weight of a single letter (0 if it never occurs)
    #[inline]
    #[must_use]
    pub const fn weight(&self, letter: Letter) -> f64 {
        self.weights[letter.index()]
    }

    /// All 26 weights in alphabet order
    #[inline]
    #[must_use]
    pub const fn weights(&self) -> &[f64; ALPHABET_SIZE] {
        &self.weights
    }

    /// Observed letters and their weights, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (Letter, f64)> + '_ {
        ALPHABET
            .iter()
            .map(|&letter| (letter, self.weight(letter)))
            .filter(|&(_, weight)| weight > 0.0)
    }

    /// Total letters tallied across the corpus
    #[inline]
    #[must_use]
    pub const fn total_letters(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The `n` most frequent letters, highest first (ties alphabetical)
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(Letter, f64)> {
        let mut observed: Vec<(Letter, f64)> = self.iter().collect();
        observed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        observed.truncate(n);
        observed
    }
}
