//! Puzzle results.

/// The integer result of a puzzle.
///
/// Its [`Display`](std::fmt::Display) form is the plain base-10 representation,
/// with no grouping separators or locale-dependent formatting.
///
/// # Examples
///
/// ```
/// use advent_solver::Answer;
///
/// assert_eq!(Answer::from(1_234_567).to_string(), "1234567");
/// assert_eq!(Answer::from(-42).to_string(), "-42");
/// assert_eq!(Answer::try_from(18_usize).map(Answer::value), Ok(18));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From,
)]
#[display("{_0}")]
pub struct Answer(i64);

impl Answer {
    /// Returns the numeric value of the answer.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<usize> for Answer {
    type Error = std::num::TryFromIntError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        i64::try_from(count).map(Self)
    }
}
