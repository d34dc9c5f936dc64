//! Pattern scanners over a [`Grid`].
//!
//! Each scanner implements the [`Scanner`] trait: a pure function from a grid
//! and a target word to the number of matches. Scanners hold no state, so the
//! same instance can be reused for any number of grids.

use std::fmt::Debug;

pub use self::{cross::CrossPatternScanner, linear::LinearWordScanner};
use crate::Grid;

mod cross;
mod linear;

/// Returns all available scanners.
#[must_use]
pub fn all_scanners() -> Vec<BoxedScanner> {
    vec![
        Box::new(LinearWordScanner::new()),
        Box::new(CrossPatternScanner::new()),
    ]
}

/// A trait for counting occurrences of a word on a grid.
pub trait Scanner: Debug + Send + Sync {
    /// Returns the name of the scanner.
    fn name(&self) -> &'static str;

    /// Counts the matches of `word` on `grid`.
    ///
    /// An empty grid always yields `0`.
    fn scan(&self, grid: &Grid, word: &str) -> usize;
}

/// A boxed scanner.
pub type BoxedScanner = Box<dyn Scanner>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_yields_zero() {
        let grid = Grid::parse("\n \n");
        for scanner in all_scanners() {
            for word in ["", "X", "MAS", "XMAS"] {
                assert_eq!(scanner.scan(&grid, word), 0, "{} {word:?}", scanner.name());
            }
        }
    }

    #[test]
    fn test_scanner_names_are_unique() {
        let scanners = all_scanners();
        assert_ne!(scanners[0].name(), scanners[1].name());
    }
}
