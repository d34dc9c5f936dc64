use crate::PuzzleId;

/// Errors that can occur when solving a registered puzzle.
///
/// [`Calendar::solve`](crate::Calendar::solve) absorbs every variant into an
/// empty answer; [`Calendar::try_solve`](crate::Calendar::try_solve) reports them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// No puzzle is registered under the requested number.
    #[display("no puzzle is registered as problem {id}")]
    UnknownPuzzle {
        /// The requested puzzle number.
        id: PuzzleId,
    },
    /// The input source has no text for the puzzle's input.
    #[display("input `{name}` is missing")]
    MissingInput {
        /// Name of the missing input.
        name: &'static str,
    },
    /// The input was loaded but nothing usable could be parsed from it.
    #[display("input `{name}` contains no usable data")]
    NoData {
        /// Name of the input.
        name: &'static str,
    },
}
