//! Test utilities for puzzle implementations.
//!
//! [`PuzzleTester`] holds an input text and checks the answers puzzles compute
//! from it:
//!
//! ```ignore
//! PuzzleTester::from_fixture("day1")
//!     .assert_answer(&TotalDistance::new(), 11)
//!     .assert_answer(&SimilarityScore::new(), 31);
//! ```

use crate::{
    Answer, Puzzle,
    input::{BundledInputs, InputSource as _},
};

/// A test harness for verifying puzzle implementations.
///
/// All assertion methods return `self` for chaining, and panic with the input
/// and puzzle name on failure, using `#[track_caller]` to report the calling
/// test's location.
#[derive(Debug)]
pub(crate) struct PuzzleTester {
    input: String,
}

impl PuzzleTester {
    /// Creates a tester for the given input text.
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Creates a tester for a bundled fixture.
    ///
    /// # Panics
    ///
    /// Panics if no fixture has that name.
    #[track_caller]
    pub(crate) fn from_fixture(name: &str) -> Self {
        let input = BundledInputs::new()
            .load_text(name)
            .unwrap_or_else(|| panic!("no bundled fixture named {name:?}"));
        Self::new(input)
    }

    /// Asserts that `puzzle` answers `expected`.
    ///
    /// Every puzzle is also solved a second time to check that the answer
    /// does not depend on earlier calls.
    #[track_caller]
    pub(crate) fn assert_answer<P>(self, puzzle: &P, expected: i64) -> Self
    where
        P: Puzzle,
    {
        let first = puzzle.solve(&self.input);
        assert_eq!(
            first,
            Some(Answer::from(expected)),
            "{} on input {:?}",
            puzzle.name(),
            self.input
        );
        assert_eq!(
            puzzle.solve(&self.input),
            first,
            "{} gave a different answer on the second call",
            puzzle.name()
        );
        self
    }

    /// Asserts that `puzzle` finds nothing usable in the input.
    #[track_caller]
    pub(crate) fn assert_no_data<P>(self, puzzle: &P) -> Self
    where
        P: Puzzle,
    {
        let answer = puzzle.solve(&self.input);
        assert_eq!(
            answer,
            None,
            "{} on input {:?}",
            puzzle.name(),
            self.input
        );
        self
    }
}
