//! Line splitting shared by every puzzle input.

/// Returns `true` for characters that end a line of puzzle text.
///
/// These are `\n`, `\r`, vertical tab, form feed, NEL, U+2028 and U+2029.
#[must_use]
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `text` into lines at every [line break](is_line_break).
///
/// Lines are yielded verbatim, including empty ones: `"a\r\nb"` yields `"a"`,
/// `""` and `"b"`. Callers drop the lines they consider blank.
///
/// # Examples
///
/// ```
/// use advent_core::text;
///
/// let lines: Vec<_> = text::lines("1   2\r3   4\u{2028}").collect();
/// assert_eq!(lines, ["1   2", "3   4", ""]);
/// ```
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_break)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_break_splits() {
        let text = "a\nb\rc\u{0B}d\u{0C}e\u{85}f\u{2028}g\u{2029}h";
        let split: Vec<_> = lines(text).collect();
        assert_eq!(split, ["a", "b", "c", "d", "e", "f", "g", "h"]);
    }

    #[test]
    fn test_crlf_leaves_an_empty_line() {
        let split: Vec<_> = lines("a\r\nb\n").collect();
        assert_eq!(split, ["a", "", "b", ""]);
    }

    #[test]
    fn test_tabs_and_spaces_do_not_split() {
        assert_eq!(lines(" a\tb ").count(), 1);
    }
}
