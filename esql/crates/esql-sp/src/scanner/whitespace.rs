//! Whitespace runs.

use super::core::{Scanned, Scanner};
use crate::chars::is_whitespace;
use crate::token::Token;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scans a maximal run of spaces, tabs and line terminators.
    ///
    /// Line terminators arrive from the cursor already normalized, so the
    /// literal holds `\n` for every `\r\n`, `\r` and `\n` in the input.
    pub(crate) fn scan_whitespace(&mut self) -> Scanned {
        let mut text = String::new();
        self.eat_while(&mut text, is_whitespace);
        self.token(Token::Whitespace, text)
    }

    /// Consumes a whitespace run without producing a token.
    pub(crate) fn skip_whitespace_run(&mut self) {
        let mut skipped = String::new();
        self.eat_while(&mut skipped, is_whitespace);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scanner, Token};
    use esql_util::Pos;

    fn whitespace_literal(source: &str) -> String {
        let (token, pos, literal) = Scanner::new(source).scan();
        assert_eq!(token, Token::Whitespace);
        assert_eq!(pos, Pos::ZERO);
        literal
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(whitespace_literal(" "), " ");
        assert_eq!(whitespace_literal("\t"), "\t");
        assert_eq!(whitespace_literal("\n"), "\n");
    }

    #[test]
    fn test_line_terminators_normalized() {
        assert_eq!(whitespace_literal("\r"), "\n");
        assert_eq!(whitespace_literal("\r\n"), "\n");
        assert_eq!(whitespace_literal("\rX"), "\n");
        assert_eq!(whitespace_literal("\n\r"), "\n\n");
        assert_eq!(whitespace_literal(" \n\t \r\n\t"), " \n\t \n\t");
    }

    #[test]
    fn test_run_stops_before_token() {
        let mut scanner = Scanner::new(" foo");
        assert_eq!(scanner.scan(), (Token::Whitespace, Pos::ZERO, " ".to_string()));
        assert_eq!(scanner.scan(), (Token::Ident, Pos::new(0, 1), "foo".to_string()));
    }

    #[test]
    fn test_skip_run_leaves_next_token() {
        let mut scanner = Scanner::new(" \r\n\tx");
        scanner.skip_whitespace_run();
        assert_eq!(scanner.pos(), Pos::new(1, 1));
        scanner.skip_whitespace_run();
        assert_eq!(scanner.scan(), (Token::Ident, Pos::new(1, 1), "x".to_string()));
    }

    #[test]
    fn test_run_advances_lines() {
        let mut scanner = Scanner::new("\r\n\r\n  x");
        assert_eq!(scanner.scan().2, "\n\n  ");
        assert_eq!(scanner.scan(), (Token::Ident, Pos::new(2, 2), "x".to_string()));
    }
}
