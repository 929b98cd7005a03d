//! Paths across the board and the path validity check

use crate::core::{Board, Coord, Letter, WORD_LEN};
use std::fmt;

/// An ordered, revisit-free sequence of coordinates
///
/// Paths only grow through [`Path::extended`], which copies on extend and
/// refuses repeated cells or growth past `WORD_LEN`. Adjacency and bounds are
/// checked separately by [`check_path`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    #[must_use]
    pub const fn new() -> Self {
        Self { coords: Vec::new() }
    }

    /// A single-cell path
    #[must_use]
    pub fn start(coord: Coord) -> Self {
        let mut coords = Vec::with_capacity(WORD_LEN);
        coords.push(coord);
        Self { coords }
    }

    /// A copy of this path with `coord` appended
    ///
    /// Returns `None` if `coord` is already on the path or the path is full.
    #[must_use]
    pub fn extended(&self, coord: Coord) -> Option<Self> {
        if self.coords.len() >= WORD_LEN || self.contains(coord) {
            return None;
        }
        let mut coords = Vec::with_capacity(WORD_LEN);
        coords.extend_from_slice(&self.coords);
        coords.push(coord);
        Some(Self { coords })
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.iter().copied()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{coord}")?;
        }
        Ok(())
    }
}

/// Read the letters along `path`, or `None` if the path is invalid
///
/// A path is invalid if it is empty, leaves the board, or takes any step that
/// is not to a cardinal neighbor. Bounds are settled here so the trie walk never
/// has to care about them. Repeated cells are not this check's concern; see
/// [`Path`].
///
/// # Examples
/// ```
/// use boggle_solver::core::{Board, Coord};
/// use boggle_solver::engine::check_path;
///
/// let board: Board = "ab/cd".parse().unwrap();
/// let letters = check_path(&[Coord::new(0, 0), Coord::new(0, 1)], &board).unwrap();
/// assert_eq!(letters.iter().map(|l| l.to_char()).collect::<String>(), "ab");
///
/// // Diagonal step
/// assert!(check_path(&[Coord::new(0, 0), Coord::new(1, 1)], &board).is_none());
/// ```
#[must_use]
pub fn check_path(path: &[Coord], board: &Board) -> Option<Vec<Letter>> {
    if path.is_empty() {
        return None;
    }

    if path
        .windows(2)
        .any(|pair| !pair[0].is_cardinal_neighbor(pair[1]))
    {
        return None;
    }

    path.iter().map(|&coord| board.letter_at(coord)).collect()
}
