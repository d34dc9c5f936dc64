use super::Scanner;
use crate::{Direction, Grid, Position};

const NAME: &str = "cross pattern";

/// A scanner that counts cells sitting at the center of an "X" of two diagonal words.
///
/// For each cell, the descending diagonal (north-west, center, south-east) and
/// the ascending diagonal (south-west, center, north-east) are read. The cell
/// counts when both read as the word or its reverse.
///
/// Neighbours outside the grid are left out of the read rather than padded, so
/// a cell on the edge is compared using its shortened diagonal. With a
/// three-letter word such a cell never matches, but it is still checked.
///
/// # Examples
///
/// ```
/// use advent_core::{
///     Grid,
///     scan::{CrossPatternScanner, Scanner as _},
/// };
///
/// let grid = Grid::parse("M.S\n.A.\nM.S");
/// assert_eq!(CrossPatternScanner::new().scan(&grid, "MAS"), 1);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CrossPatternScanner;

impl CrossPatternScanner {
    /// Creates a new `CrossPatternScanner`.
    #[must_use]
    pub const fn new() -> Self {
        CrossPatternScanner
    }
}

/// Reads the diagonal through `center` from `from` to the opposite side,
/// skipping cells outside the grid.
fn read_diagonal(grid: &Grid, center: Position, from: Direction, to: Direction) -> String {
    [center.step(from, 1), Some(center), center.step(to, 1)]
        .into_iter()
        .flatten()
        .filter_map(|pos| grid.get(pos))
        .collect()
}

impl Scanner for CrossPatternScanner {
    fn name(&self) -> &'static str {
        NAME
    }

    fn scan(&self, grid: &Grid, word: &str) -> usize {
        let reversed: String = word.chars().rev().collect();
        let is_match = |diagonal: &str| diagonal == word || diagonal == reversed;

        grid.positions()
            .filter(|&center| {
                let descending =
                    read_diagonal(grid, center, Direction::NorthWest, Direction::SouthEast);
                let ascending =
                    read_diagonal(grid, center, Direction::SouthWest, Direction::NorthEast);
                is_match(&descending) && is_match(&ascending)
            })
            .count()
    }
}
