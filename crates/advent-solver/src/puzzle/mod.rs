//! Puzzle implementations.
//!
//! Each puzzle implements the [`Puzzle`] trait: it names the input it reads and
//! computes an [`Answer`] from that input's text. Puzzles keep no state between
//! calls.

use std::fmt::Debug;

pub use self::{
    instructions::{ConditionalMulSum, Instruction, Instructions, MulState, MulSum},
    location_lists::{SimilarityScore, TotalDistance},
    reports::{DampenedSafeReports, SafeReports},
    word_search::{CrossWordSearch, LinearWordSearch},
};
use crate::Answer;

mod instructions;
mod location_lists;
mod reports;
mod word_search;

/// Returns all available puzzles, in problem order.
///
/// The position of a puzzle in this list (starting from 1) is its problem
/// number in [`Calendar::with_all_puzzles`](crate::Calendar::with_all_puzzles).
///
/// # Examples
///
/// ```
/// use advent_solver::puzzle;
///
/// let puzzles = puzzle::all_puzzles();
/// assert_eq!(puzzles.len(), 8);
/// assert_eq!(puzzles[0].input_name(), "day1");
/// ```
#[must_use]
pub fn all_puzzles() -> Vec<BoxedPuzzle> {
    vec![
        Box::new(TotalDistance::new()),
        Box::new(SimilarityScore::new()),
        Box::new(SafeReports::new()),
        Box::new(DampenedSafeReports::new()),
        Box::new(MulSum::new()),
        Box::new(ConditionalMulSum::new()),
        Box::new(LinearWordSearch::new()),
        Box::new(CrossWordSearch::new()),
    ]
}

/// A trait representing a single puzzle.
pub trait Puzzle: Debug + Send + Sync {
    /// Returns the name of the puzzle.
    fn name(&self) -> &'static str;

    /// Returns the name of the input this puzzle reads.
    fn input_name(&self) -> &'static str;

    /// Computes the answer from the input text.
    ///
    /// Malformed lines are skipped. Returns `None` when nothing usable remains
    /// in the input.
    fn solve(&self, input: &str) -> Option<Answer>;
}

/// A boxed puzzle.
pub type BoxedPuzzle = Box<dyn Puzzle>;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::input::{BundledInputs, InputSource as _};

    #[test]
    fn test_puzzle_names_are_unique() {
        let puzzles = all_puzzles();
        let names: HashSet<_> = puzzles.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), puzzles.len());
    }

    #[test]
    fn test_every_input_is_bundled() {
        let inputs = BundledInputs::new();
        for puzzle in all_puzzles() {
            assert!(
                inputs.load_text(puzzle.input_name()).is_some(),
                "{}",
                puzzle.name()
            );
        }
    }

    #[test]
    fn test_blank_input_never_panics() {
        for puzzle in all_puzzles() {
            for input in ["", "\n\n", "   \n\t"] {
                let _ = puzzle.solve(input);
            }
        }
    }
}
