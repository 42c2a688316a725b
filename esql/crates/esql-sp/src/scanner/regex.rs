//! Regular expression literals.
//!
//! `/` is also the division operator, so `/.../` literals are never reached
//! from `scan()`. The parser calls [`Scanner::scan_regex`] when the grammar
//! expects a pattern.

use esql_util::{DiagnosticBuilder, DiagnosticCode};
use log::{trace, warn};

use super::core::{Scanned, Scanner};
use crate::token::Token;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scans a `/`-delimited regular expression.
    ///
    /// Only `\/` is decoded (to `/`); every other backslash pair is copied
    /// verbatim so the regex engine sees it. A line terminator or the end of
    /// input also ends the body. The line terminator is left unread.
    ///
    /// With `skip_whitespace` set, leading whitespace is skipped first. If the
    /// next character is not `/` this falls back to [`scan`](Self::scan) and
    /// records a warning.
    ///
    /// # Example
    ///
    /// ```
    /// use esql_sp::{Scanner, Token};
    ///
    /// let (token, _, body) = Scanner::new(r"/^cpu\.\d+\/total/").scan_regex();
    /// assert_eq!(token, Token::Regex);
    /// assert_eq!(body, r"^cpu\.\d+/total");
    /// ```
    pub fn scan_regex(&mut self) -> Scanned {
        if self.config().skip_whitespace {
            self.skip_whitespace_run();
        }
        self.token_start = self.cursor.pos();

        if !self.cursor.match_char('/') {
            warn!(
                "scan_regex called at {} without a leading '/'; scanning an ordinary token",
                self.token_start
            );
            if self.config().report_diagnostics {
                DiagnosticBuilder::warning("expected '/' to start a regular expression")
                    .code(DiagnosticCode::W_SCAN_NOT_A_REGEX)
                    .pos(self.token_start)
                    .emit(&self.handler);
            }
            return self.scan();
        }

        let mut body = String::new();
        loop {
            match self.cursor.read() {
                None | Some('/') => break,
                Some('\n') => {
                    self.cursor.unread();
                    break;
                },
                Some('\\') => {
                    if self.cursor.match_char('/') {
                        body.push('/');
                    } else {
                        body.push('\\');
                    }
                },
                Some(ch) => body.push(ch),
            }
        }

        let scanned = self.token(Token::Regex, body);
        trace!("scanned {} {:?} at {}", scanned.0, scanned.2, scanned.1);
        scanned
    }
}
