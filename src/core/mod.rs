//! Core domain types for the word grid
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Letters, words, coordinates and boards are all validated on construction, so
//! the engine never re-checks them.

mod board;
mod coord;
mod letter;
mod word;

pub use board::{Board, BoardError};
pub use coord::{Coord, ParseCoordError};
pub use letter::{ALPHABET, ALPHABET_SIZE, Letter};
pub use word::{WORD_LEN, Word, WordError};
