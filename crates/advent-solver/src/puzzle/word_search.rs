//! Word searches on a letter grid.

use advent_core::{
    Grid,
    scan::{CrossPatternScanner, LinearWordScanner, Scanner},
};

use super::Puzzle;
use crate::Answer;

const INPUT: &str = "day4";

/// Runs `scanner` for `word` over the grid parsed from `input`.
///
/// An input without any non-blank line has no answer.
fn search(scanner: &dyn Scanner, input: &str, word: &str) -> Option<Answer> {
    let grid = Grid::parse(input);
    if grid.is_empty() {
        return None;
    }
    let count = scanner.scan(&grid, word);
    log::debug!(
        "{} scan found {count} x {word:?} on a {}x{} grid",
        scanner.name(),
        grid.height(),
        grid.width()
    );
    Answer::try_from(count).ok()
}

/// Occurrences of `XMAS` read in a straight line in any direction.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearWordSearch;

impl LinearWordSearch {
    /// The word being searched for.
    pub const WORD: &'static str = "XMAS";

    /// Creates a new `LinearWordSearch` puzzle.
    #[must_use]
    pub const fn new() -> Self {
        LinearWordSearch
    }
}

impl Puzzle for LinearWordSearch {
    fn name(&self) -> &'static str {
        "linear word search"
    }

    fn input_name(&self) -> &'static str {
        INPUT
    }

    fn solve(&self, input: &str) -> Option<Answer> {
        search(&LinearWordScanner::new(), input, Self::WORD)
    }
}

/// Cells at the center of two crossing diagonal `MAS` words.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrossWordSearch;

impl CrossWordSearch {
    /// The word each diagonal must read, forwards or backwards.
    pub const WORD: &'static str = "MAS";

    /// Creates a new `CrossWordSearch` puzzle.
    #[must_use]
    pub const fn new() -> Self {
        CrossWordSearch
    }
}

impl Puzzle for CrossWordSearch {
    fn name(&self) -> &'static str {
        "cross word search"
    }

    fn input_name(&self) -> &'static str {
        INPUT
    }

    fn solve(&self, input: &str) -> Option<Answer> {
        search(&CrossPatternScanner::new(), input, Self::WORD)
    }
}
