//! Corrupted multiplication programs.
//!
//! The input is free-form text in which a few instructions are embedded:
//!
//! - `mul(X,Y)` where `X` and `Y` are runs of ASCII digits
//! - `don't`, which disables later multiplications
//! - `do`, which enables them again
//!
//! Everything else is noise. [`Instructions`] scans the text left to right; at
//! each position it tries `mul(X,Y)`, then `don't`, then `do`, and on failure
//! moves on by one byte. [`MulState`] is the two-state machine driven by the
//! `do`/`don't` instructions.

use super::Puzzle;
use crate::Answer;

const INPUT: &str = "day3";

/// An instruction recognised in the program text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Multiply two operands.
    Mul {
        /// Left operand.
        lhs: i64,
        /// Right operand.
        rhs: i64,
    },
    /// Enable multiplications.
    Do,
    /// Disable multiplications.
    Dont,
}

impl Instruction {
    /// Returns the product of a `mul` instruction, or `None` for any other
    /// instruction or when the product overflows.
    #[must_use]
    pub fn product(self) -> Option<i64> {
        match self {
            Self::Mul { lhs, rhs } => lhs.checked_mul(rhs),
            Self::Do | Self::Dont => None,
        }
    }
}

/// Iterator over the instructions embedded in a program text.
///
/// A `mul` whose operand does not fit in an `i64` is consumed but not yielded.
///
/// # Examples
///
/// ```
/// use advent_solver::puzzle::{Instruction, Instructions};
///
/// let found: Vec<_> = Instructions::new("xmul(2,4)don't()mul[3,7]undo()").collect();
/// assert_eq!(
///     found,
///     [
///         Instruction::Mul { lhs: 2, rhs: 4 },
///         Instruction::Dont,
///         Instruction::Do,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    rest: &'a [u8],
}

impl<'a> Instructions<'a> {
    /// Creates an iterator over the instructions in `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text.as_bytes(),
        }
    }
}

/// Splits a non-empty run of ASCII digits off the front of `bytes`.
fn split_digits(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    (len > 0).then(|| bytes.split_at(len))
}

fn parse_operand(digits: &[u8]) -> Option<i64> {
    std::str::from_utf8(digits).ok()?.parse().ok()
}

/// Matches `mul(X,Y)` at the front of `bytes`.
///
/// Returns the parsed instruction (if both operands fit) and the rest of the
/// input after the closing parenthesis.
fn match_mul(bytes: &[u8]) -> Option<(Option<Instruction>, &[u8])> {
    let rest = bytes.strip_prefix(b"mul(")?;
    let (lhs, rest) = split_digits(rest)?;
    let rest = rest.strip_prefix(b",")?;
    let (rhs, rest) = split_digits(rest)?;
    let rest = rest.strip_prefix(b")")?;

    let instruction = parse_operand(lhs)
        .zip(parse_operand(rhs))
        .map(|(lhs, rhs)| Instruction::Mul { lhs, rhs });
    if instruction.is_none() {
        log::debug!("skipping multiplication with an oversized operand");
    }
    Some((instruction, rest))
}

impl Iterator for Instructions<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            if let Some((instruction, rest)) = match_mul(self.rest) {
                self.rest = rest;
                if instruction.is_some() {
                    return instruction;
                }
            } else if let Some(rest) = self.rest.strip_prefix(b"don't") {
                self.rest = rest;
                return Some(Instruction::Dont);
            } else if let Some(rest) = self.rest.strip_prefix(b"do") {
                self.rest = rest;
                return Some(Instruction::Do);
            } else {
                self.rest = &self.rest[1..];
            }
        }
        None
    }
}

/// Whether multiplications currently count.
///
/// # Examples
///
/// ```
/// use advent_solver::puzzle::{Instruction, MulState};
///
/// let state = MulState::default();
/// assert_eq!(state, MulState::Enabled);
/// assert_eq!(state.next(Instruction::Dont), MulState::Disabled);
/// assert_eq!(
///     MulState::Disabled.next(Instruction::Mul { lhs: 1, rhs: 2 }),
///     MulState::Disabled
/// );
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MulState {
    /// Multiplications are added to the total.
    #[default]
    #[display("enabled")]
    Enabled,
    /// Multiplications are ignored.
    #[display("disabled")]
    Disabled,
}

impl MulState {
    /// Returns the state after `instruction`.
    #[must_use]
    pub const fn next(self, instruction: Instruction) -> Self {
        match instruction {
            Instruction::Do => Self::Enabled,
            Instruction::Dont => Self::Disabled,
            Instruction::Mul { .. } => self,
        }
    }
}

/// Adds the product of a `mul` instruction to `total`.
///
/// Other instructions leave `total` unchanged. A product or sum that overflows
/// is skipped.
fn accumulate(total: i64, instruction: Instruction) -> i64 {
    let Instruction::Mul { lhs, rhs } = instruction else {
        return total;
    };
    let Some(product) = instruction.product() else {
        log::debug!("mul({lhs},{rhs}) overflows; skipped");
        return total;
    };
    if let Some(sum) = total.checked_add(product) {
        sum
    } else {
        log::debug!("adding mul({lhs},{rhs}) = {product} overflows the total; skipped");
        total
    }
}

/// Sum of the products of every `mul` instruction.
#[derive(Debug, Default, Clone, Copy)]
pub struct MulSum;

impl MulSum {
    /// Creates a new `MulSum` puzzle.
    #[must_use]
    pub const fn new() -> Self {
        MulSum
    }
}

impl Puzzle for MulSum {
    fn name(&self) -> &'static str {
        "multiplication sum"
    }

    fn input_name(&self) -> &'static str {
        INPUT
    }

    fn solve(&self, input: &str) -> Option<Answer> {
        let total = Instructions::new(input).fold(0, accumulate);
        Some(Answer::from(total))
    }
}

/// Sum of the products of the `mul` instructions that run while enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConditionalMulSum;

impl ConditionalMulSum {
    /// Creates a new `ConditionalMulSum` puzzle.
    #[must_use]
    pub const fn new() -> Self {
        ConditionalMulSum
    }
}

impl Puzzle for ConditionalMulSum {
    fn name(&self) -> &'static str {
        "conditional multiplication sum"
    }

    fn input_name(&self) -> &'static str {
        INPUT
    }

    fn solve(&self, input: &str) -> Option<Answer> {
        let mut state = MulState::default();
        let mut total = 0;
        for instruction in Instructions::new(input) {
            let next = state.next(instruction);
            if next != state {
                log::trace!("multiplications {next}");
            }
            state = next;
            if state == MulState::Enabled {
                total = accumulate(total, instruction);
            }
        }
        Some(Answer::from(total))
    }
}
