//! Board solving command
//!
//! Finds every word on a board and records how much searching it took.

use crate::core::Board;
use crate::dictionary::Trie;
use crate::engine::{Found, SolveStats, Solver};
use log::info;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Configuration for solving a board
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    /// Spread start cells across threads
    pub parallel: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(parallel: bool) -> Self {
        Self { parallel }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub words: BTreeSet<String>,
    pub found: Vec<Found>,
    pub stats: SolveStats,
    pub duration: Duration,
}

/// Solve a board, timing the word search itself
///
/// Paths and branch counters are collected in separate passes after the
/// timed search.
#[must_use]
pub fn solve_board(board: Board, trie: &Trie, config: SolveConfig) -> SolveResult {
    let solver = Solver::new(&board, trie);

    let start = Instant::now();
    let words = if config.parallel {
        solver.solve_parallel()
    } else {
        solver.solve()
    };
    let duration = start.elapsed();

    let found = solver.find_all();
    let stats = solver.stats();
    info!(
        "{} words on {board} ({} branches, {} pruned) in {duration:?}",
        words.len(),
        stats.branches,
        stats.dead_ends
    );

    SolveResult {
        board,
        words,
        found,
        stats,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryIndex;

    fn index() -> DictionaryIndex {
        DictionaryIndex::build(["apple", "stone", "notes", "crane"]).unwrap()
    }

    #[test]
    fn solve_board_finds_words() {
        let index = index();
        let board: Board = "apple/zzzzz/stone/zzzzz/zzzzz".parse().unwrap();
        let result = solve_board(board, index.trie(), SolveConfig::default());

        assert!(result.words.contains("apple"));
        assert!(result.words.contains("stone"));
        assert_eq!(result.words.len(), 2);
        assert_eq!(result.found.len(), 2);
        assert_eq!(result.stats.words_found, 2);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let index = index();
        let board: Board = "apple/zzzzz/stone/zzzzz/enots".parse().unwrap();
        let sequential = solve_board(board.clone(), index.trie(), SolveConfig::new(false));
        let parallel = solve_board(board, index.trie(), SolveConfig::new(true));
        assert_eq!(sequential.words, parallel.words);
    }

    #[test]
    fn empty_board_result() {
        let index = index();
        let board: Board = "zzz/zzz/zzz".parse().unwrap();
        let result = solve_board(board, index.trie(), SolveConfig::default());
        assert!(result.words.is_empty());
        assert!(result.found.is_empty());
        assert_eq!(result.stats.branches, 9);
        assert_eq!(result.stats.dead_ends, 9);
    }
}
