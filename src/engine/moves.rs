//! Move validation: path check plus trie walk
//!
//! This is the single decision point behind both interactive move feedback and
//! the solver's pruning.

use super::path::check_path;
use crate::core::{Board, Coord};
use crate::dictionary::{Trie, TrieNode};
use log::trace;

/// Verdict for a candidate path
#[derive(Debug, Clone, Copy)]
pub enum MoveResult<'t> {
    /// Invalid path, or no dictionary word starts with these letters
    DeadEnd,
    /// A proper prefix of at least one word; keep extending
    Partial(&'t TrieNode),
    /// The path spells a complete word
    Word(&'t str),
}

impl<'t> MoveResult<'t> {
    #[inline]
    #[must_use]
    pub const fn is_dead_end(&self) -> bool {
        matches!(self, Self::DeadEnd)
    }

    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }

    /// The completed word, if any
    #[inline]
    #[must_use]
    pub const fn word(&self) -> Option<&'t str> {
        match self {
            Self::Word(text) => Some(*text),
            _ => None,
        }
    }
}

/// Check a path against the board and walk its letters through the trie
///
/// # Examples
/// ```
/// use boggle_solver::core::{Board, Coord};
/// use boggle_solver::dictionary::DictionaryIndex;
/// use boggle_solver::engine::{MoveResult, check_solution};
///
/// let index = DictionaryIndex::build(["apple"]).unwrap();
/// let board: Board = "apple/zzzzz/zzzzz/zzzzz/zzzzz".parse().unwrap();
/// let path: Vec<Coord> = (0..5).map(|col| Coord::new(0, col)).collect();
///
/// assert!(matches!(
///     check_solution(&path[..4], &board, index.trie()),
///     MoveResult::Partial(_)
/// ));
/// assert_eq!(check_solution(&path, &board, index.trie()).word(), Some("apple"));
/// ```
#[must_use]
pub fn check_solution<'t>(path: &[Coord], board: &Board, trie: &'t Trie) -> MoveResult<'t> {
    let Some(letters) = check_path(path, board) else {
        return MoveResult::DeadEnd;
    };

    let mut node = trie.root();
    for letter in letters {
        match node.child(letter) {
            Some(next) => node = next,
            None => {
                trace!("dead end at '{letter}' after {} steps", path.len());
                return MoveResult::DeadEnd;
            }
        }
    }

    match node.word() {
        Some(text) => MoveResult::Word(text),
        None => MoveResult::Partial(node),
    }
}
