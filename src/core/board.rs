//! The letter grid
//!
//! An N×N board stored row-major. Boards are immutable once built; a new game
//! replaces the whole board.

use super::coord::Coord;
use super::letter::Letter;
use std::fmt;
use std::str::FromStr;

/// An N×N grid of letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Letter>,
}

/// Error type for invalid boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidSize(usize),
    Parse(String),
    Weights(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => write!(f, "board size must be positive, got {size}"),
            Self::Parse(reason) => write!(f, "invalid board: {reason}"),
            Self::Weights(reason) => write!(f, "cannot sample letters: {reason}"),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Build a board from row-major cells
    ///
    /// # Errors
    /// Returns `BoardError::InvalidSize` if `size` is 0 or `size * size`
    /// overflows, and `BoardError::Parse` if `cells` is not `size * size` long.
    pub fn new(size: usize, cells: Vec<Letter>) -> Result<Self, BoardError> {
        let expected = Self::cell_count_for(size)?;
        if cells.len() != expected {
            return Err(BoardError::Parse(format!(
                "expected {expected} cells for a {size}x{size} board, got {}",
                cells.len()
            )));
        }
        Ok(Self { size, cells })
    }

    /// Build a board from one string per row
    ///
    /// # Errors
    /// Returns `BoardError` if the rows are not all the same length as the
    /// number of rows, or contain anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, Coord};
    ///
    /// let board = Board::from_rows(&["ab", "cd"]).unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.letter_at(Coord::new(1, 0)).unwrap().to_char(), 'c');
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let size = rows.len();
        Self::cell_count_for(size)?;

        // Widths are checked before allocating, so the cell buffer is never
        // larger than the input text
        for (row_idx, row) in rows.iter().enumerate() {
            let width = row.as_ref().chars().count();
            if width != size {
                return Err(BoardError::Parse(format!(
                    "row {row_idx} has {width} letters, expected {size}"
                )));
            }
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row_idx, row) in rows.iter().enumerate() {
            for ch in row.as_ref().chars() {
                let letter = Letter::from_char(ch).ok_or_else(|| {
                    BoardError::Parse(format!("row {row_idx} contains non-letter '{ch}'"))
                })?;
                cells.push(letter);
            }
        }

        Self::new(size, cells)
    }

    /// Number of cells on a `size`×`size` board
    ///
    /// # Errors
    /// Returns `BoardError::InvalidSize` if `size` is 0 or the count overflows.
    pub fn cell_count_for(size: usize) -> Result<usize, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        size.checked_mul(size).ok_or(BoardError::InvalidSize(size))
    }

    /// Side length N
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// True iff both components lie in `[0, N-1]`
    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Letter at `coord`, or `None` if it is off the board
    #[inline]
    #[must_use]
    pub fn letter_at(&self, coord: Coord) -> Option<Letter> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Every cell, row by row
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size as isize;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// On-board cardinal neighbors of `coord`
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord
            .cardinal_neighbors()
            .into_iter()
            .filter(move |&next| next != coord && self.contains(next))
    }

    /// Rows as letter slices
    pub fn rows(&self) -> impl Iterator<Item = &[Letter]> {
        self.cells.chunks(self.size)
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse rows separated by `/` or whitespace, e.g. `"abc/def/ghi"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for letter in row {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
