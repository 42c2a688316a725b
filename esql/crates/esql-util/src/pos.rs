//! Source positions.
//!
//! A [`Pos`] marks where a token begins. Both coordinates are zero-based and
//! counted in characters (not bytes), and the column is relative to the start
//! of the current line.
//!
//! # Examples
//!
//! ```
//! use esql_util::Pos;
//!
//! let mut pos = Pos::ZERO;
//! pos.advance('a');
//! assert_eq!(pos, Pos::new(0, 1));
//!
//! pos.advance('\n');
//! assert_eq!(pos, Pos::new(1, 0));
//! ```

use std::fmt;

/// A zero-based `(line, column)` position in the input.
///
/// The line index increments once per line terminator. The column counts
/// characters consumed since the start of the current line and resets to zero
/// after every line terminator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    /// Line index (0-based)
    pub line: u32,
    /// Character offset from the start of the line (0-based)
    pub column: u32,
}

impl Pos {
    /// The position of the first character of any input.
    pub const ZERO: Pos = Pos { line: 0, column: 0 };

    /// Create a new position
    ///
    /// # Examples
    ///
    /// ```
    /// use esql_util::Pos;
    ///
    /// let pos = Pos::new(2, 5);
    /// assert_eq!(pos.line, 2);
    /// assert_eq!(pos.column, 5);
    /// ```
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Move past one character.
    ///
    /// `ch` must already be line-terminator normalized: only `'\n'` starts a
    /// new line. A carriage return reaching this method counts as an ordinary
    /// character. Both counters saturate at `u32::MAX`.
    #[inline]
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 0;
        } else {
            self.column = self.column.saturating_add(1);
        }
    }

    /// Returns the position after `ch`, leaving `self` untouched.
    #[inline]
    pub fn after(self, ch: char) -> Self {
        let mut next = self;
        next.advance(ch);
        next
    }
}

/// Formats the position one-based, the way error messages show it.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, char {}",
            u64::from(self.line) + 1,
            u64::from(self.column) + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_zero() {
        assert_eq!(Pos::ZERO, Pos::new(0, 0));
        assert_eq!(Pos::default(), Pos::ZERO);
    }

    #[test]
    fn test_advance_column() {
        let mut pos = Pos::ZERO;
        for ch in "select".chars() {
            pos.advance(ch);
        }
        assert_eq!(pos, Pos::new(0, 6));
    }

    #[test]
    fn test_advance_newline_resets_column() {
        let mut pos = Pos::new(0, 12);
        pos.advance('\n');
        assert_eq!(pos, Pos::new(1, 0));
        pos.advance('\t');
        assert_eq!(pos, Pos::new(1, 1));
    }

    #[test]
    fn test_after_does_not_mutate() {
        let pos = Pos::new(3, 4);
        assert_eq!(pos.after('x'), Pos::new(3, 5));
        assert_eq!(pos, Pos::new(3, 4));
    }

    #[test]
    fn test_advance_saturates() {
        let mut pos = Pos::new(u32::MAX, u32::MAX);
        pos.advance('x');
        assert_eq!(pos, Pos::new(u32::MAX, u32::MAX));
        pos.advance('\n');
        assert_eq!(pos, Pos::new(u32::MAX, 0));
        assert_eq!(
            Pos::new(u32::MAX, u32::MAX).to_string(),
            "line 4294967296, char 4294967296"
        );
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Pos::new(0, 0).to_string(), "line 1, char 1");
        assert_eq!(Pos::new(4, 9).to_string(), "line 5, char 10");
    }

    #[test]
    fn test_ordering() {
        assert!(Pos::new(0, 40) < Pos::new(1, 0));
        assert!(Pos::new(1, 2) < Pos::new(1, 3));
    }

    #[quickcheck]
    fn prop_line_counts_newlines(text: String) -> bool {
        let mut pos = Pos::ZERO;
        for ch in text.chars() {
            pos.advance(ch);
        }
        pos.line as usize == text.matches('\n').count()
    }

    #[quickcheck]
    fn prop_column_counts_chars_after_last_newline(text: String) -> bool {
        let mut pos = Pos::ZERO;
        for ch in text.chars() {
            pos.advance(ch);
        }
        let tail = text.rsplit('\n').next().unwrap_or("");
        pos.column as usize == tail.chars().count()
    }
}
