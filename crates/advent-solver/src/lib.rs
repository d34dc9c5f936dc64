//! Numbered puzzle solvers over text inputs.
//!
//! This crate turns the raw text of a puzzle input into an [`Answer`]. Each
//! puzzle is a pure function of its input text; the [`Calendar`] numbers the
//! registered puzzles, loads their inputs from an [`InputSource`] and formats
//! the answers.
//!
//! # Overview
//!
//! - [`puzzle`]: The [`Puzzle`] trait and every available puzzle
//! - [`input`]: Where input text comes from (bundled fixtures, a directory, memory)
//! - [`calendar`]: The registry mapping puzzle numbers to puzzles
//! - [`answer`]: Puzzle results and their decimal formatting
//!
//! # Examples
//!
//! ```
//! use advent_solver::{Calendar, PuzzleId, input::BundledInputs};
//!
//! let calendar = Calendar::with_all_puzzles(BundledInputs::new());
//!
//! assert_eq!(calendar.solve(PuzzleId::new(1)), "11");
//! assert_eq!(calendar.solve(PuzzleId::new(7)), "18");
//!
//! // Unknown puzzles yield an empty answer instead of an error.
//! assert_eq!(calendar.solve(PuzzleId::new(99)), "");
//! ```

pub use self::{
    answer::Answer,
    calendar::{Calendar, PuzzleId},
    error::SolveError,
    input::InputSource,
    puzzle::{BoxedPuzzle, Puzzle},
};

pub mod answer;
pub mod calendar;
mod error;
pub mod input;
pub mod puzzle;
#[cfg(test)]
mod testing;
