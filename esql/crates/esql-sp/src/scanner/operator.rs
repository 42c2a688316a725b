//! Operator and punctuation scanning.

use super::core::{Scanned, Scanner};
use crate::token::Token;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scans the longest operator starting with `ch`, which was just consumed.
    ///
    /// Operators carry an empty literal. A character that starts no operator,
    /// including a `!` not followed by `~`, is `Illegal` with that character
    /// as its literal.
    pub(crate) fn scan_operator(&mut self, ch: char) -> Scanned {
        let token = match ch {
            '<' => {
                if self.cursor.match_char('=') {
                    Token::Lte
                } else if self.cursor.match_char('>') {
                    Token::Neq
                } else {
                    Token::Lt
                }
            },
            '>' => {
                if self.cursor.match_char('=') {
                    Token::Gte
                } else {
                    Token::Gt
                }
            },
            '=' => {
                if self.cursor.match_char('~') {
                    Token::EqRegex
                } else {
                    Token::Eq
                }
            },
            '!' if self.cursor.match_char('~') => Token::NeqRegex,
            ',' => Token::Comma,
            '.' => Token::Dot,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '+' => Token::Add,
            '-' => Token::Sub,
            '*' => Token::Mul,
            '/' => Token::Div,
            other => return self.token(Token::Illegal, other.to_string()),
        };
        self.token(token, String::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scanner, Token};
    use esql_util::Pos;

    fn scan_op(source: &str) -> (Token, String) {
        let (token, _, literal) = Scanner::new(source).scan();
        (token, literal)
    }

    #[test]
    fn test_single_char_operators() {
        let cases = [
            ("+", Token::Add),
            ("-", Token::Sub),
            ("*", Token::Mul),
            ("/", Token::Div),
            ("=", Token::Eq),
            ("<", Token::Lt),
            (">", Token::Gt),
            ("(", Token::LParen),
            (")", Token::RParen),
            (",", Token::Comma),
            (".", Token::Dot),
        ];
        for (source, token) in cases {
            assert_eq!(scan_op(source), (token, String::new()), "{}", source);
        }
    }

    #[test]
    fn test_two_char_operators() {
        let cases = [
            ("<=", Token::Lte),
            ("<>", Token::Neq),
            (">=", Token::Gte),
            ("=~", Token::EqRegex),
            ("!~", Token::NeqRegex),
        ];
        for (source, token) in cases {
            assert_eq!(scan_op(source), (token, String::new()), "{}", source);
        }
    }

    #[test]
    fn test_lone_bang_is_illegal() {
        let mut scanner = Scanner::new("! ");
        assert_eq!(scanner.scan(), (Token::Illegal, Pos::ZERO, "!".to_string()));
        assert_eq!(scanner.scan(), (Token::Whitespace, Pos::new(0, 1), " ".to_string()));
    }

    #[test]
    fn test_bang_equals_is_illegal_then_eq() {
        let mut scanner = Scanner::new("!=");
        assert_eq!(scanner.scan().0, Token::Illegal);
        assert_eq!(scanner.scan(), (Token::Eq, Pos::new(0, 1), String::new()));
    }

    #[test]
    fn test_illegal_characters() {
        assert_eq!(scan_op("#"), (Token::Illegal, "#".to_string()));
        assert_eq!(scan_op(";"), (Token::Illegal, ";".to_string()));
        assert_eq!(scan_op("€"), (Token::Illegal, "€".to_string()));
    }

    #[test]
    fn test_maximal_munch() {
        let tokens: Vec<_> = Scanner::new("<=<>>=<").into_iter().map(|(t, _, _)| t).collect();
        assert_eq!(tokens, vec![Token::Lte, Token::Neq, Token::Gte, Token::Lt]);
    }

    #[test]
    fn test_less_then_equals_regex() {
        let tokens: Vec<_> = Scanner::new("<=~").into_iter().map(|(t, _, _)| t).collect();
        assert_eq!(tokens, vec![Token::Lte, Token::Illegal]);
    }
}
