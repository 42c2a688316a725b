//! Identifier and keyword scanning.

use super::core::{Scanned, Scanner};
use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, Token};

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scans an identifier or keyword.
    ///
    /// The first character (a letter, `_` or `@`) has already been checked by
    /// the dispatcher. Keywords come back with an empty literal; identifiers
    /// keep their original spelling.
    pub(crate) fn scan_identifier(&mut self) -> Scanned {
        let mut text = String::new();
        if let Some(first) = self.cursor.read() {
            text.push(first);
        }
        self.eat_while(&mut text, is_ident_continue);

        match keyword_from_ident(&text) {
            Some(keyword) => self.token(keyword, String::new()),
            None => self.token(Token::Ident, text),
        }
    }
}
