//! Character grids built from puzzle text.

use std::fmt::{self, Display};

use crate::{Position, text::lines};

/// A grid of single characters, one row per non-blank input line.
///
/// Rows are expected to share a length, but nothing enforces it: every access
/// is checked against the row it addresses, so ragged input reads as missing
/// cells rather than panicking.
///
/// # Examples
///
/// ```
/// use advent_core::{Grid, Position};
///
/// let grid = Grid::parse("XMAS\n\nSAMX\n");
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.get(Position::new(1, 0)), Some('S'));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a grid from raw text.
    ///
    /// The text is split with [`lines`]. Lines that are empty after trimming
    /// are dropped; every other line becomes a row of its characters,
    /// verbatim.
    ///
    /// Empty or blank text yields an empty grid.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let rows = lines(text)
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().collect())
            .collect();
        Self { rows }
    }

    /// Creates a grid from pre-split rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// Returns `true` if the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the length of the longest row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the rows of the grid.
    #[must_use]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Returns the character at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.row())?.get(pos.col()).copied()
    }

    /// Returns an iterator over every cell position, in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            (0..cells.len()).map(move |col| Position::new(row, col))
        })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
