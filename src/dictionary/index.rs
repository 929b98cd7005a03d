//! Dictionary construction
//!
//! Builds the trie and the letter frequency table in a single pass over the
//! word list. Both structures are immutable once built.

use super::frequency::FrequencyTable;
use super::trie::Trie;
use crate::core::{Letter, Word, WordError};
use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DataError {
    /// The word source could not be read
    Io(io::Error),
    /// The word source contained no usable words
    Empty,
    /// A word broke the fixed-length, letters-only precondition
    InvalidWord {
        index: usize,
        word: String,
        reason: WordError,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read word list: {e}"),
            Self::Empty => write!(f, "word list contains no usable words"),
            Self::InvalidWord {
                index,
                word,
                reason,
            } => write!(f, "invalid word #{index} '{word}': {reason}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidWord { reason, .. } => Some(reason),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DataError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// The trie and frequency table built from one word list
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    trie: Trie,
    frequencies: FrequencyTable,
}

impl DictionaryIndex {
    /// Build the dictionary from a sequence of words
    ///
    /// Every word must be exactly 5 letters. Malformed words abort the build
    /// instead of being truncated or skipped; filtering belongs to whoever
    /// reads the raw word source.
    ///
    /// # Errors
    /// - `DataError::InvalidWord` on the first malformed word
    /// - `DataError::Empty` if `words` yields nothing
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::build(["apple", "stone"]).unwrap();
    /// assert!(index.trie().contains("stone"));
    ///
    /// assert!(DictionaryIndex::build(["apples"]).is_err());
    /// ```
    pub fn build<I, S>(words: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        let mut counts: FxHashMap<Letter, usize> = FxHashMap::default();
        let mut seen = 0usize;

        for (index, raw) in words.into_iter().enumerate() {
            let raw = raw.as_ref();
            let word = Word::new(raw).map_err(|reason| DataError::InvalidWord {
                index,
                word: raw.to_string(),
                reason,
            })?;

            for &letter in word.letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
            trie.insert(&word);
            seen += 1;
        }

        if seen == 0 {
            return Err(DataError::Empty);
        }

        let frequencies = FrequencyTable::from_counts(&counts);
        debug!(
            "built dictionary: {} words read, {} distinct, {} trie nodes, {} letters observed",
            seen,
            trie.len(),
            trie.node_count(),
            frequencies.iter().count()
        );

        Ok(Self { trie, frequencies })
    }

    #[inline]
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    #[inline]
    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Split into `(Trie, FrequencyTable)`
    #[must_use]
    pub fn into_parts(self) -> (Trie, FrequencyTable) {
        (self.trie, self.frequencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_inserts_every_word() {
        let index = DictionaryIndex::build(["apple", "apply", "stone"]).unwrap();
        assert_eq!(index.trie().len(), 3);
        assert!(index.trie().contains("apple"));
        assert!(index.trie().contains("apply"));
        assert!(index.trie().contains("stone"));
    }

    #[test]
    fn build_normalizes_frequencies() {
        let index = DictionaryIndex::build(["apple", "stone", "crane"]).unwrap();
        let sum: f64 = index.frequencies().weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(index.frequencies().total_letters(), 15);
    }

    #[test]
    fn frequencies_count_every_position() {
        let index = DictionaryIndex::build(["aaaab"]).unwrap();
        let a = Letter::from_char('a').unwrap();
        assert!((index.frequencies().weight(a) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn duplicates_count_towards_frequencies_only() {
        let index = DictionaryIndex::build(["stone", "stone"]).unwrap();
        assert_eq!(index.trie().len(), 1);
        assert_eq!(index.frequencies().total_letters(), 10);
    }

    #[test]
    fn empty_list_is_data_error() {
        let words: [&str; 0] = [];
        assert!(matches!(DictionaryIndex::build(words), Err(DataError::Empty)));
    }

    #[test]
    fn wrong_length_word_is_rejected_not_truncated() {
        let result = DictionaryIndex::build(["apple", "apples", "stone"]);
        match result {
            Err(DataError::InvalidWord {
                index,
                word,
                reason,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(word, "apples");
                assert_eq!(reason, WordError::InvalidLength(6));
            }
            other => panic!("expected InvalidWord, got {other:?}"),
        }
    }

    #[test]
    fn short_word_is_rejected() {
        assert!(matches!(
            DictionaryIndex::build(["app"]),
            Err(DataError::InvalidWord { index: 0, .. })
        ));
    }

    #[test]
    fn non_letter_word_is_rejected() {
        assert!(matches!(
            DictionaryIndex::build(["ap-le"]),
            Err(DataError::InvalidWord {
                reason: WordError::InvalidCharacters,
                ..
            })
        ));
    }

    #[test]
    fn into_parts_returns_both_structures() {
        let index = DictionaryIndex::build(["apple"]).unwrap();
        let (trie, frequencies) = index.into_parts();
        assert_eq!(trie.len(), 1);
        assert!(!frequencies.is_empty());
    }

    #[test]
    fn error_display_names_the_word() {
        let err = DictionaryIndex::build(["toolong"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid word #0 'toolong': word must be exactly 5 letters, got 7"
        );
    }
}
