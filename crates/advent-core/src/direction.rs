//! Compass directions on a grid.

/// One of the eight unit steps between neighbouring cells.
///
/// Rows grow downwards, so [`Direction::North`] decreases the row index and
/// [`Direction::East`] increases the column index.
///
/// # Examples
///
/// ```
/// use advent_core::Direction;
///
/// assert_eq!(Direction::ALL.len(), 8);
/// assert_eq!(Direction::SouthEast.delta(), (1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    North,
    /// One row up, one column right.
    NorthEast,
    /// One column right.
    East,
    /// One row down, one column right.
    SouthEast,
    /// One row down.
    South,
    /// One row down, one column left.
    SouthWest,
    /// One column left.
    West,
    /// One row up, one column left.
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from [`Direction::North`].
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Returns the `(row, col)` step of this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }
}
