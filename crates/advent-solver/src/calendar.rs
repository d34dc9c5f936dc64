//! The puzzle registry.

use std::num::NonZeroU32;

use crate::{Answer, BoxedPuzzle, InputSource, Puzzle, SolveError, puzzle};

/// The number of a registered puzzle, starting from 1.
///
/// # Examples
///
/// ```
/// use advent_solver::PuzzleId;
///
/// let id: PuzzleId = "7".parse()?;
/// assert_eq!(id, PuzzleId::new(7));
/// assert_eq!(id.to_string(), "7");
/// assert!("0".parse::<PuzzleId>().is_err());
/// # Ok::<(), std::num::ParseIntError>(())
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::FromStr,
)]
pub struct PuzzleId(NonZeroU32);

impl PuzzleId {
    /// Creates a puzzle number.
    ///
    /// # Panics
    ///
    /// Panics if `number` is zero.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        match NonZeroU32::new(number) {
            Some(number) => Self(number),
            None => panic!("puzzle numbers start at 1"),
        }
    }

    /// Returns the puzzle number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    fn from_index(index: usize) -> Option<Self> {
        let number = u32::try_from(index).ok()?.checked_add(1)?;
        NonZeroU32::new(number).map(Self)
    }

    fn index(self) -> Option<usize> {
        usize::try_from(self.get() - 1).ok()
    }
}

/// A registry of numbered puzzles and the source of their inputs.
///
/// Puzzles are numbered from 1 in registration order. Solving reads the
/// puzzle's input afresh on every call, so the calendar holds no state that
/// changes between calls.
///
/// # Examples
///
/// ```
/// use advent_solver::{Calendar, PuzzleId, input::MemoryInputs};
///
/// let inputs = MemoryInputs::from_iter([("day4", "M.S\n.A.\nM.S\n")]);
/// let calendar = Calendar::with_all_puzzles(inputs);
///
/// assert_eq!(calendar.solve(PuzzleId::new(8)), "1");
/// // Problem 1 reads `day1`, which this source does not have.
/// assert_eq!(calendar.solve(PuzzleId::new(1)), "");
/// ```
#[derive(Debug)]
pub struct Calendar {
    puzzles: Vec<BoxedPuzzle>,
    inputs: Box<dyn InputSource>,
}

impl Calendar {
    /// Creates a calendar with the specified puzzles, numbered in order.
    #[must_use]
    pub fn new<I>(puzzles: Vec<BoxedPuzzle>, inputs: I) -> Self
    where
        I: InputSource + 'static,
    {
        Self {
            puzzles,
            inputs: Box::new(inputs),
        }
    }

    /// Creates a calendar with all available puzzles.
    ///
    /// Puzzles are numbered as listed by [`puzzle::all_puzzles`].
    #[must_use]
    pub fn with_all_puzzles<I>(inputs: I) -> Self
    where
        I: InputSource + 'static,
    {
        Self::new(puzzle::all_puzzles(), inputs)
    }

    /// Returns every registered puzzle with its number.
    pub fn puzzles(&self) -> impl Iterator<Item = (PuzzleId, &dyn Puzzle)> + '_ {
        self.puzzles
            .iter()
            .enumerate()
            .filter_map(|(i, puzzle)| Some((PuzzleId::from_index(i)?, &**puzzle)))
    }

    /// Returns the puzzle registered as `id`.
    #[must_use]
    pub fn get(&self, id: PuzzleId) -> Option<&dyn Puzzle> {
        self.puzzles.get(id.index()?).map(|puzzle| &**puzzle)
    }

    /// Solves the puzzle registered as `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnknownPuzzle`] if no puzzle has that number,
    /// [`SolveError::MissingInput`] if the input source has no text for the
    /// puzzle, and [`SolveError::NoData`] if nothing usable was parsed from it.
    pub fn try_solve(&self, id: PuzzleId) -> Result<Answer, SolveError> {
        let puzzle = self.get(id).ok_or(SolveError::UnknownPuzzle { id })?;
        let name = puzzle.input_name();
        let text = self
            .inputs
            .load_text(name)
            .ok_or(SolveError::MissingInput { name })?;
        let answer = puzzle.solve(&text).ok_or(SolveError::NoData { name })?;
        log::debug!("problem {id} ({}) = {answer}", puzzle.name());
        Ok(answer)
    }

    /// Solves the puzzle registered as `id` and formats the answer.
    ///
    /// Any failure is logged and yields an empty string.
    #[must_use]
    pub fn solve(&self, id: PuzzleId) -> String {
        match self.try_solve(id) {
            Ok(answer) => answer.to_string(),
            Err(e) => {
                log::warn!("problem {id}: {e}");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::input::{BundledInputs, MemoryInputs};

    #[test]
    fn test_bundled_answers() {
        let calendar = Calendar::with_all_puzzles(BundledInputs::new());
        let answers: Vec<_> = calendar
            .puzzles()
            .map(|(id, _)| calendar.solve(id))
            .collect();
        assert_eq!(answers, ["11", "31", "2", "4", "161", "48", "18", "9"]);
    }

    #[test]
    fn test_numbering_follows_registration_order() {
        let calendar = Calendar::with_all_puzzles(BundledInputs::new());
        let ids: Vec<_> = calendar.puzzles().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            calendar.get(PuzzleId::new(3)).map(Puzzle::name),
            Some("safe reports")
        );
        assert!(calendar.get(PuzzleId::new(9)).is_none());
    }

    #[test]
    fn test_unknown_puzzle() {
        let calendar = Calendar::with_all_puzzles(BundledInputs::new());
        let id = PuzzleId::new(42);
        assert_eq!(
            calendar.try_solve(id),
            Err(SolveError::UnknownPuzzle { id })
        );
        assert_eq!(calendar.solve(id), "");
        assert_eq!(calendar.solve(PuzzleId::new(u32::MAX)), "");
    }

    #[test]
    fn test_missing_input() {
        let calendar = Calendar::with_all_puzzles(MemoryInputs::new());
        assert_eq!(
            calendar.try_solve(PuzzleId::new(1)),
            Err(SolveError::MissingInput { name: "day1" })
        );
        assert_eq!(calendar.solve(PuzzleId::new(1)), "");
    }

    #[test]
    fn test_no_data() {
        let inputs = MemoryInputs::from_iter([("day1", "not a number\n"), ("day4", "\n\n")]);
        let calendar = Calendar::with_all_puzzles(inputs);
        assert_eq!(
            calendar.try_solve(PuzzleId::new(2)),
            Err(SolveError::NoData { name: "day1" })
        );
        assert_eq!(calendar.solve(PuzzleId::new(7)), "");
    }

    #[test]
    fn test_empty_calendar() {
        let calendar = Calendar::new(Vec::new(), BundledInputs::new());
        assert_eq!(calendar.puzzles().count(), 0);
        assert_eq!(calendar.solve(PuzzleId::new(1)), "");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SolveError::UnknownPuzzle {
                id: PuzzleId::new(9)
            }
            .to_string(),
            "no puzzle is registered as problem 9"
        );
        assert_eq!(
            SolveError::MissingInput { name: "day1" }.to_string(),
            "input `day1` is missing"
        );
    }

    proptest! {
        #[test]
        fn prop_solve_is_idempotent(number in 1u32..12, text in "[XMAS0-9 .\n]{0,64}") {
            let inputs = MemoryInputs::from_iter(
                ["day1", "day2", "day3", "day4"].map(|name| (name, text.clone())),
            );
            let calendar = Calendar::with_all_puzzles(inputs);
            let id = PuzzleId::new(number);
            prop_assert_eq!(calendar.solve(id), calendar.solve(id));
        }
    }
}
