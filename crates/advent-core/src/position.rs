//! Grid cell coordinates.

use crate::Direction;

/// A cell position on a [`Grid`](crate::Grid), in `(row, col)` order.
///
/// A position only says where a cell would be; whether it lies inside a
/// particular grid is answered by [`Grid::get`](crate::Grid::get).
///
/// # Examples
///
/// ```
/// use advent_core::{Direction, Position};
///
/// let pos = Position::new(1, 1);
/// assert_eq!(pos.step(Direction::NorthWest, 1), Some(Position::new(0, 0)));
/// assert_eq!(pos.step(Direction::North, 2), None);
/// assert_eq!(pos.to_string(), "(1, 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Moves `distance` cells in `direction`.
    ///
    /// Returns `None` if either coordinate would become negative or overflow.
    /// The result is not checked against any grid bounds.
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let distance = isize::try_from(distance).ok()?;
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr.checked_mul(distance)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(distance)?)?;
        Some(Self { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_zero_is_identity() {
        let pos = Position::new(3, 4);
        for dir in Direction::ALL {
            assert_eq!(pos.step(dir, 0), Some(pos));
        }
    }

    #[test]
    fn test_step_moves_by_delta() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::East, 3), Some(Position::new(5, 8)));
        assert_eq!(pos.step(Direction::SouthWest, 2), Some(Position::new(7, 3)));
        assert_eq!(pos.step(Direction::North, 5), Some(Position::new(0, 5)));
    }

    #[test]
    fn test_step_rejects_negative_coordinates() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::North, 1), None);
        assert_eq!(origin.step(Direction::West, 1), None);
        assert_eq!(origin.step(Direction::NorthEast, 1), None);
        assert_eq!(origin.step(Direction::SouthWest, 1), None);
        assert_eq!(origin.step(Direction::SouthEast, 1), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_step_rejects_overflow() {
        let far = Position::new(usize::MAX, 0);
        assert_eq!(far.step(Direction::South, 1), None);
        assert_eq!(Position::new(0, 0).step(Direction::South, usize::MAX), None);
    }
}
