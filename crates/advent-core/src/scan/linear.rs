use super::Scanner;
use crate::{Direction, Grid, Position};

const NAME: &str = "linear word";

/// A scanner that counts straight-line occurrences of a word in all eight directions.
///
/// Every cell is tried as a start and every [`Direction`] is checked from it,
/// so overlapping occurrences all count and a palindromic word is counted once
/// from each end. A start/direction pair contributes nothing when the word
/// would run off the grid.
///
/// # Examples
///
/// ```
/// use advent_core::{
///     Grid,
///     scan::{LinearWordScanner, Scanner as _},
/// };
///
/// let scanner = LinearWordScanner::new();
///
/// assert_eq!(scanner.scan(&Grid::parse("XMAS"), "XMAS"), 1);
/// assert_eq!(scanner.scan(&Grid::parse("XMASAMX"), "XMAS"), 2);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearWordScanner;

impl LinearWordScanner {
    /// Creates a new `LinearWordScanner`.
    #[must_use]
    pub const fn new() -> Self {
        LinearWordScanner
    }
}

/// Returns `true` if `word` reads from `start` towards `direction`.
fn reads_at(grid: &Grid, start: Position, direction: Direction, word: &[char]) -> bool {
    word.iter().enumerate().all(|(i, &expected)| {
        start
            .step(direction, i)
            .and_then(|pos| grid.get(pos))
            .is_some_and(|actual| actual == expected)
    })
}

impl Scanner for LinearWordScanner {
    fn name(&self) -> &'static str {
        NAME
    }

    fn scan(&self, grid: &Grid, word: &str) -> usize {
        let word: Vec<char> = word.chars().collect();
        if word.is_empty() {
            return 0;
        }

        grid.positions()
            .map(|start| {
                Direction::ALL
                    .into_iter()
                    .filter(|&direction| reads_at(grid, start, direction, &word))
                    .count()
            })
            .sum()
    }
}
