//! Dictionary word representation
//!
//! A Word stores a 5-letter dictionary entry along with its decoded letters.

use super::letter::{ALPHABET, Letter};
use std::fmt;

/// Fixed length of every dictionary word (and so the deepest path worth walking)
pub const WORD_LEN: usize = 5;

/// A validated 5-letter dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "word must contain only letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased first. Words of any other length are rejected
    /// rather than truncated.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Word;
    ///
    /// let word = Word::new("Stone").unwrap();
    /// assert_eq!(word.text(), "stone");
    ///
    /// assert!(Word::new("stones").is_err());
    /// assert!(Word::new("st0ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        let mut letters = [ALPHABET[0]; WORD_LEN];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = Letter::from_char(ch).ok_or(WordError::InvalidCharacters)?;
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LEN] {
        &self.letters
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
