//! Two side-by-side lists of location IDs.
//!
//! Each input line holds a left and a right number separated by exactly three
//! spaces. Lines in any other shape are skipped.

use std::collections::HashMap;

use advent_core::text;

use super::Puzzle;
use crate::Answer;

const INPUT: &str = "day1";
const SEPARATOR: &str = "   ";

/// The left and right columns of the input, in input order.
#[derive(Debug, Default)]
struct LocationLists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl LocationLists {
    /// Parses the input, returning `None` if no line was valid.
    fn parse(input: &str) -> Option<Self> {
        let mut lists = Self::default();
        for line in text::lines(input).filter(|line| !line.is_empty()) {
            let Some((left, right)) = parse_pair(line) else {
                log::trace!("skipping malformed location line {line:?}");
                continue;
            };
            lists.left.push(left);
            lists.right.push(right);
        }
        (!lists.left.is_empty()).then_some(lists)
    }
}

fn parse_pair(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.split(SEPARATOR);
    let (left, right) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    Some((left.trim().parse().ok()?, right.trim().parse().ok()?))
}

/// Sum of distances between the two lists paired up in sorted order.
#[derive(Debug, Default, Clone, Copy)]
pub struct TotalDistance;

impl TotalDistance {
    /// Creates a new `TotalDistance` puzzle.
    #[must_use]
    pub const fn new() -> Self {
        TotalDistance
    }
}

impl Puzzle for TotalDistance {
    fn name(&self) -> &'static str {
        "total distance"
    }

    fn input_name(&self) -> &'static str {
        INPUT
    }

    fn solve(&self, input: &str) -> Option<Answer> {
        let LocationLists {
            mut left,
            mut right,
        } = LocationLists::parse(input)?;
        left.sort_unstable();
        right.sort_unstable();

        let mut total: i64 = 0;
        for (l, r) in left.into_iter().zip(right) {
            let distance = i64::try_from(l.abs_diff(r)).ok();
            let Some(sum) = distance.and_then(|d| total.checked_add(d)) else {
                log::debug!("distance between {l} and {r} overflows the total; skipped");
                continue;
            };
            total = sum;
        }
        Some(Answer::from(total))
    }
}

/// Sum of each left value weighted by how often it occurs in the right list.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimilarityScore;

impl SimilarityScore {
    /// Creates a new `SimilarityScore` puzzle.
    #[must_use]
    pub const fn new() -> Self {
        SimilarityScore
    }
}

impl Puzzle for SimilarityScore {
    fn name(&self) -> &'static str {
        "similarity score"
    }

    fn input_name(&self) -> &'static str {
        INPUT
    }

    fn solve(&self, input: &str) -> Option<Answer> {
        let LocationLists { left, right } = LocationLists::parse(input)?;

        let mut occurrences: HashMap<i64, i64> = HashMap::new();
        for value in right {
            *occurrences.entry(value).or_default() += 1;
        }

        let mut score: i64 = 0;
        for value in left {
            let count = occurrences.get(&value).copied().unwrap_or(0);
            let Some(sum) = value
                .checked_mul(count)
                .and_then(|weighted| score.checked_add(weighted))
            else {
                log::debug!("similarity of {value} overflows the score; skipped");
                continue;
            };
            score = sum;
        }
        Some(Answer::from(score))
    }
}
