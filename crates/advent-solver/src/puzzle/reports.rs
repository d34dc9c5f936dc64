//! Reactor safety reports.
//!
//! Each non-empty input line is a report: a list of integer levels separated by
//! single spaces. Tokens that are not integers are dropped from the report, so
//! a line without any integer is an empty report, which is safe.

use advent_core::text;

use super::Puzzle;
use crate::Answer;

const INPUT: &str = "day2";

/// Smallest and largest allowed difference between adjacent levels.
const STEP_RANGE: std::ops::RangeInclusive<u64> = 1..=3;

fn parse_reports(input: &str) -> impl Iterator<Item = Vec<i64>> + '_ {
    text::lines(input)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let report: Vec<i64> = line
                .split(' ')
                .filter_map(|token| token.parse().ok())
                .collect();
            if report.is_empty() {
                log::trace!("report line {line:?} has no levels");
            }
            report
        })
}

/// Returns `true` if the levels move in one direction by 1 to 3 at every step.
///
/// Reports with fewer than two levels are safe.
fn is_safe(levels: &[i64]) -> bool {
    let mut increasing = false;
    let mut decreasing = false;
    for pair in levels.windows(2) {
        let (level, next) = (pair[0], pair[1]);
        increasing |= level < next;
        decreasing |= level > next;
        if (increasing && decreasing) || !STEP_RANGE.contains(&level.abs_diff(next)) {
            return false;
        }
    }
    true
}

/// Returns `true` if the report is safe, or becomes safe once one level is removed.
fn is_safe_dampened(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }
    (0..levels.len()).any(|skip| {
        let remaining: Vec<i64> = levels
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &level)| level)
            .collect();
        is_safe(&remaining)
    })
}

fn count_reports(input: &str, pred: impl Fn(&[i64]) -> bool) -> Option<Answer> {
    let count = parse_reports(input).filter(|report| pred(report)).count();
    Answer::try_from(count).ok()
}

/// Number of safe reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct SafeReports;

impl SafeReports {
    /// Creates a new `SafeReports` puzzle.
    #[must_use]
    pub const fn new() -> Self {
        SafeReports
    }
}

impl Puzzle for SafeReports {
    fn name(&self) -> &'static str {
        "safe reports"
    }

    fn input_name(&self) -> &'static str {
        INPUT
    }

    fn solve(&self, input: &str) -> Option<Answer> {
        count_reports(input, is_safe)
    }
}

/// Number of reports that are safe when a single bad level may be removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct DampenedSafeReports;

impl DampenedSafeReports {
    /// Creates a new `DampenedSafeReports` puzzle.
    #[must_use]
    pub const fn new() -> Self {
        DampenedSafeReports
    }
}

impl Puzzle for DampenedSafeReports {
    fn name(&self) -> &'static str {
        "dampened safe reports"
    }

    fn input_name(&self) -> &'static str {
        INPUT
    }

    fn solve(&self, input: &str) -> Option<Answer> {
        count_reports(input, is_safe_dampened)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::PuzzleTester;

    #[test]
    fn test_sample() {
        PuzzleTester::from_fixture(INPUT)
            .assert_answer(&SafeReports::new(), 2)
            .assert_answer(&DampenedSafeReports::new(), 4);
    }

    #[test]
    fn test_is_safe() {
        assert!(is_safe(&[7, 6, 4, 2, 1]));
        assert!(is_safe(&[1, 3, 6, 7, 9]));
        assert!(!is_safe(&[1, 2, 7, 8, 9]));
        assert!(!is_safe(&[1, 3, 2, 4, 5]));
        assert!(!is_safe(&[8, 6, 4, 4, 1]));
        assert!(is_safe(&[5]));
        assert!(is_safe(&[]));
    }

    #[test]
    fn test_is_safe_dampened() {
        assert!(is_safe_dampened(&[1, 3, 2, 4, 5]));
        assert!(is_safe_dampened(&[8, 6, 4, 4, 1]));
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[1, 2, 3, 9]));
        assert!(!is_safe_dampened(&[1, 2, 7, 8, 9]));
        assert!(!is_safe_dampened(&[9, 7, 6, 2, 1]));
    }

    #[test]
    fn test_unparseable_tokens_are_dropped() {
        // "1 x 2 3" keeps [1, 2, 3]; "1  2" keeps [1, 2]; "foo" keeps [].
        PuzzleTester::new("1 x 2 3\n1  2\nfoo\n")
            .assert_answer(&SafeReports::new(), 3)
            .assert_answer(&DampenedSafeReports::new(), 3);
    }

    #[test]
    fn test_line_without_levels_is_a_safe_report() {
        PuzzleTester::new("foo\n7 6 4 2 1\n")
            .assert_answer(&SafeReports::new(), 2)
            .assert_answer(&DampenedSafeReports::new(), 2);
        PuzzleTester::new("foo\n1 2 7 8 9\n").assert_answer(&SafeReports::new(), 1);
    }

    #[test]
    fn test_carriage_return_separates_reports() {
        PuzzleTester::new("7 6 4 2 1\r1 3 6 7 9\r")
            .assert_answer(&SafeReports::new(), 2);
    }

    #[test]
    fn test_empty_input_counts_zero() {
        PuzzleTester::new("")
            .assert_answer(&SafeReports::new(), 0)
            .assert_answer(&DampenedSafeReports::new(), 0);
    }

    proptest! {
        #[test]
        fn prop_dampening_never_loses_reports(levels in prop::collection::vec(-20i64..20, 0..8)) {
            prop_assert!(!is_safe(&levels) || is_safe_dampened(&levels));
        }

        #[test]
        fn prop_reversed_report_same_safety(levels in prop::collection::vec(-20i64..20, 0..8)) {
            let reversed: Vec<i64> = levels.iter().rev().copied().collect();
            prop_assert_eq!(is_safe(&levels), is_safe(&reversed));
            prop_assert_eq!(is_safe_dampened(&levels), is_safe_dampened(&reversed));
        }
    }
}
