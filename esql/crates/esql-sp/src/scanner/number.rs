//! Number literal scanning.

use super::core::{Scanned, Scanner};
use crate::chars::is_digit;
use crate::token::Token;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scans an integer or float literal.
    ///
    /// Digits, optionally followed by `.` and more digits. The literal is the
    /// consumed text verbatim, so `007` stays `007` and `10.` stays `10.`.
    pub(crate) fn scan_number(&mut self) -> Scanned {
        let mut text = String::new();
        self.eat_while(&mut text, is_digit);

        if !self.cursor.match_char('.') {
            return self.token(Token::Integer, text);
        }

        text.push('.');
        self.eat_while(&mut text, is_digit);
        self.token(Token::Float, text)
    }
}
