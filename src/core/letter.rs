//! Board and dictionary letters
//!
//! A `Letter` is a single lowercase ASCII letter. Both the board cells and the
//! trie edges are labelled with letters, so everything downstream can index a
//! 26-slot table without re-validating characters.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A single lowercase letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Every letter, in alphabetical order
pub const ALPHABET: [Letter; ALPHABET_SIZE] = {
    let mut letters = [Letter(b'a'); ALPHABET_SIZE];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        letters[i] = Letter(b'a' + i as u8);
        i += 1;
    }
    letters
};

impl Letter {
    /// Create a letter from an ASCII byte, folding uppercase to lowercase
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Letter;
    ///
    /// assert_eq!(Letter::from_byte(b'Q'), Letter::from_byte(b'q'));
    /// assert!(Letter::from_byte(b'3').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let lower = byte.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(Self(lower))
        } else {
            None
        }
    }

    /// Create a letter from a char
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii() {
            Self::from_byte(ch as u8)
        } else {
            None
        }
    }

    /// Position in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
