//! Grid coordinates
//!
//! Components are signed so that off-board input such as `(-1, 0)` can be
//! represented and rejected by the path checks instead of wrapping around.

use std::fmt;
use std::str::FromStr;

/// A `(row, col)` position on the board, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// True iff the two cells differ by exactly 1 in one component and 0 in the other
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Coord;
    ///
    /// let origin = Coord::new(0, 0);
    /// assert!(origin.is_cardinal_neighbor(Coord::new(0, 1)));
    /// assert!(!origin.is_cardinal_neighbor(Coord::new(1, 1)));
    /// assert!(!origin.is_cardinal_neighbor(origin));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_cardinal_neighbor(self, other: Self) -> bool {
        matches!(
            (self.row.abs_diff(other.row), self.col.abs_diff(other.col)),
            (0, 1) | (1, 0)
        )
    }

    /// The four cardinal neighbors: down, up, right, left
    ///
    /// No bounds checking; callers filter against the board.
    #[must_use]
    pub const fn cardinal_neighbors(self) -> [Self; 4] {
        [
            Self::new(self.row.saturating_add(1), self.col),
            Self::new(self.row.saturating_sub(1), self.col),
            Self::new(self.row, self.col.saturating_add(1)),
            Self::new(self.row, self.col.saturating_sub(1)),
        ]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when parsing a coordinate fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordError(String);

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 'row col', got '{}'", self.0)
    }
}

impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parse `"row col"`, `"row,col"` or `"(row, col)"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseCoordError(s.to_string());
        let cleaned = s.trim().trim_start_matches('(').trim_end_matches(')');

        let mut parts = cleaned
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let row = parts.next().ok_or_else(error)?;
        let col = parts.next().ok_or_else(error)?;
        if parts.next().is_some() {
            return Err(error());
        }

        Ok(Self::new(
            row.parse().map_err(|_| error())?,
            col.parse().map_err(|_| error())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_neighbors_are_adjacent() {
        let center = Coord::new(2, 3);
        for neighbor in center.cardinal_neighbors() {
            assert!(center.is_cardinal_neighbor(neighbor));
            assert!(neighbor.is_cardinal_neighbor(center));
        }
    }

    #[test]
    fn diagonal_and_distant_cells_are_not_adjacent() {
        let center = Coord::new(2, 2);
        assert!(!center.is_cardinal_neighbor(Coord::new(3, 3)));
        assert!(!center.is_cardinal_neighbor(Coord::new(1, 3)));
        assert!(!center.is_cardinal_neighbor(Coord::new(2, 4)));
        assert!(!center.is_cardinal_neighbor(Coord::new(0, 2)));
    }

    #[test]
    fn extreme_components_do_not_overflow() {
        let far = Coord::new(isize::MIN, isize::MAX);
        assert!(!far.is_cardinal_neighbor(Coord::new(isize::MAX, isize::MIN)));
        assert_eq!(far.cardinal_neighbors().len(), 4);
    }

    #[test]
    fn parse_accepts_common_forms() {
        assert_eq!("1 2".parse::<Coord>(), Ok(Coord::new(1, 2)));
        assert_eq!("1,2".parse::<Coord>(), Ok(Coord::new(1, 2)));
        assert_eq!("(3, 4)".parse::<Coord>(), Ok(Coord::new(3, 4)));
        assert_eq!("-1 0".parse::<Coord>(), Ok(Coord::new(-1, 0)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("1".parse::<Coord>().is_err());
        assert!("a b".parse::<Coord>().is_err());
        assert!("1 2 3".parse::<Coord>().is_err());
        assert!("".parse::<Coord>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let coord = Coord::new(4, 0);
        assert_eq!(coord.to_string(), "(4, 0)");
        assert_eq!(coord.to_string().parse::<Coord>(), Ok(coord));
    }
}
