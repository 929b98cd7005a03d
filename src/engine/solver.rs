//! Exhaustive board search
//!
//! Depth-first search from every cell, pruned by the trie. Each branch owns its
//! path: extending a branch copies the path, so sibling branches never observe
//! each other's cells and start cells can be searched independently.

use super::moves::{MoveResult, check_solution};
use super::path::Path;
use crate::core::{Board, Coord};
use crate::dictionary::Trie;
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// A word found on the board together with the path that spells it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub word: String,
    pub path: Path,
}

/// Counters for a full search pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Paths evaluated against the trie
    pub branches: usize,
    /// Branches pruned as dead ends
    pub dead_ends: usize,
    /// Word occurrences (the same word on two paths counts twice)
    pub words_found: usize,
}

/// Board solver over a shared, read-only board and trie
pub struct Solver<'a> {
    board: &'a Board,
    trie: &'a Trie,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(board: &'a Board, trie: &'a Trie) -> Self {
        Self { board, trie }
    }

    /// Visit every branch of the search, starting from every cell in row order
    ///
    /// `visit` sees each evaluated path and its verdict. Branches stop at a
    /// dead end or a complete word; partial prefixes extend to each on-board
    /// cardinal neighbor not already on the path.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&Path, &MoveResult<'a>),
    {
        for start in self.board.coords() {
            self.walk_from(start, &mut visit);
        }
    }

    /// Visit every branch rooted at a single start cell
    pub fn walk_from<F>(&self, start: Coord, visit: &mut F)
    where
        F: FnMut(&Path, &MoveResult<'a>),
    {
        self.explore(Path::start(start), visit);
    }

    fn explore<F>(&self, path: Path, visit: &mut F)
    where
        F: FnMut(&Path, &MoveResult<'a>),
    {
        let result = check_solution(path.as_slice(), self.board, self.trie);
        visit(&path, &result);

        if !matches!(result, MoveResult::Partial(_)) {
            return;
        }
        let Some(last) = path.last() else {
            return;
        };

        for next in self.board.neighbors(last) {
            if let Some(extended) = path.extended(next) {
                self.explore(extended, visit);
            }
        }
    }

    /// Every distinct word on the board
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    /// use boggle_solver::dictionary::DictionaryIndex;
    /// use boggle_solver::engine::Solver;
    ///
    /// let index = DictionaryIndex::build(["stone", "notes"]).unwrap();
    /// let board: Board = "stone/xxxxx/xxxxx/xxxxx/xxxxx".parse().unwrap();
    ///
    /// let words = Solver::new(&board, index.trie()).solve();
    /// assert!(words.contains("stone"));
    /// assert!(!words.contains("notes"));
    /// ```
    #[must_use]
    pub fn solve(&self) -> BTreeSet<String> {
        let mut words = BTreeSet::new();
        self.walk(|_, result| {
            if let Some(word) = result.word() {
                words.insert(word.to_string());
            }
        });
        debug!("solved {}x{} board: {} words", self.board.size(), self.board.size(), words.len());
        words
    }

    /// Every word occurrence with its path, in search order
    #[must_use]
    pub fn find_all(&self) -> Vec<Found> {
        let mut found = Vec::new();
        self.walk(|path, result| {
            if let Some(word) = result.word() {
                found.push(Found {
                    word: word.to_string(),
                    path: path.clone(),
                });
            }
        });
        found
    }

    /// The first path found for each distinct word, in search order
    #[must_use]
    pub fn find_distinct(&self) -> Vec<Found> {
        let mut seen = BTreeSet::new();
        let mut found = Vec::new();
        self.walk(|path, result| {
            if let Some(word) = result.word()
                && seen.insert(word)
            {
                found.push(Found {
                    word: word.to_string(),
                    path: path.clone(),
                });
            }
        });
        found
    }

    /// Same result as [`Solver::solve`], with start cells spread over the rayon pool
    ///
    /// Each start cell gets its own word set; sets are merged at the end.
    #[must_use]
    pub fn solve_parallel(&self) -> BTreeSet<String> {
        let starts: Vec<Coord> = self.board.coords().collect();

        starts
            .par_iter()
            .map(|&start| {
                let mut words = BTreeSet::new();
                self.walk_from(start, &mut |_: &Path, result: &MoveResult<'a>| {
                    if let Some(word) = result.word() {
                        words.insert(word.to_string());
                    }
                });
                words
            })
            .reduce(BTreeSet::new, |mut acc, words| {
                acc.extend(words);
                acc
            })
    }

    /// Branch counters for a full search
    #[must_use]
    pub fn stats(&self) -> SolveStats {
        self.solve_with_stats().1
    }

    /// Distinct words and branch counters from a single search pass
    #[must_use]
    pub fn solve_with_stats(&self) -> (BTreeSet<String>, SolveStats) {
        let mut words = BTreeSet::new();
        let mut stats = SolveStats::default();
        self.walk(|_, result| {
            stats.branches += 1;
            match result {
                MoveResult::DeadEnd => stats.dead_ends += 1,
                MoveResult::Word(text) => {
                    stats.words_found += 1;
                    words.insert((*text).to_string());
                }
                MoveResult::Partial(_) => {}
            }
        });
        (words, stats)
    }
}
