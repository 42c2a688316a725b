//! Token-level lookahead for parsers.
//!
//! [`BufScanner`] remembers the last few scanned tokens in a ring buffer so
//! a parser can step back without rewinding the character cursor.

use std::array;

use esql_util::Pos;
use log::warn;

use crate::scanner::{Scanned, Scanner};
use crate::token::Token;

/// Number of tokens that can be unscanned.
pub const BUFFER_SIZE: usize = 3;

/// A [`Scanner`] with a small buffer of already scanned tokens.
///
/// # Example
///
/// ```
/// use esql_sp::{BufScanner, Scanner, Token};
///
/// let mut scanner = BufScanner::new(Scanner::new("a = b"));
/// assert_eq!(scanner.scan().0, Token::Ident);
/// assert_eq!(scanner.peek().0, Token::Whitespace);
/// assert_eq!(scanner.scan_ignore_whitespace().0, Token::Eq);
///
/// scanner.unscan();
/// assert_eq!(scanner.scan().0, Token::Eq);
/// ```
pub struct BufScanner<I> {
    scanner: Scanner<I>,

    /// Ring of recently scanned tokens; `buf[index]` is the newest.
    buf: [Scanned; BUFFER_SIZE],
    index: usize,

    /// Tokens pushed back and not yet rescanned.
    pending: usize,

    /// Slots holding a real token, capped at `BUFFER_SIZE`.
    filled: usize,
}

impl<I: Iterator<Item = char>> BufScanner<I> {
    /// Wraps `scanner`.
    pub fn new(scanner: Scanner<I>) -> Self {
        Self {
            scanner,
            buf: array::from_fn(|_| (Token::Eof, Pos::ZERO, String::new())),
            index: 0,
            pending: 0,
            filled: 0,
        }
    }

    /// Returns the next token, replaying an unscanned one if present.
    pub fn scan(&mut self) -> Scanned {
        self.scan_with(Scanner::scan)
    }

    /// Scans a regular expression.
    ///
    /// Leading whitespace is skipped, whether it is still in the input or
    /// was already buffered by a peek or by [`scan_ignore_whitespace`]. If
    /// another token was unscanned, it is replayed instead: the buffer never
    /// rescans characters.
    ///
    /// [`scan_ignore_whitespace`]: Self::scan_ignore_whitespace
    pub fn scan_regex(&mut self) -> Scanned {
        if self.next_pending().is_some_and(|(token, _, _)| *token == Token::Whitespace) {
            self.pending -= 1;
        }
        self.scan_with(|scanner| {
            scanner.skip_whitespace_run();
            scanner.scan_regex()
        })
    }

    /// Returns the next non-whitespace token.
    pub fn scan_ignore_whitespace(&mut self) -> Scanned {
        let scanned = self.scan();
        if scanned.0 == Token::Whitespace {
            self.scan()
        } else {
            scanned
        }
    }

    /// Pushes the most recent token back.
    ///
    /// At most [`BUFFER_SIZE`] tokens can be pending; extra calls are ignored.
    pub fn unscan(&mut self) {
        if self.pending >= self.filled {
            warn!(
                "unscan with {} token(s) already pending; ignoring",
                self.pending
            );
            return;
        }
        self.pending += 1;
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Scanned {
        let scanned = self.scan();
        self.unscan();
        scanned
    }

    /// The wrapped scanner.
    pub fn get_ref(&self) -> &Scanner<I> {
        &self.scanner
    }

    /// Unwraps the scanner. Pending tokens are dropped.
    pub fn into_inner(self) -> Scanner<I> {
        self.scanner
    }

    fn scan_with(&mut self, scan: impl FnOnce(&mut Scanner<I>) -> Scanned) -> Scanned {
        if self.pending > 0 {
            self.pending -= 1;
            return self.current().clone();
        }

        self.index = (self.index + 1) % BUFFER_SIZE;
        self.buf[self.index] = scan(&mut self.scanner);
        self.filled = (self.filled + 1).min(BUFFER_SIZE);
        self.current().clone()
    }

    /// The token the next scan would replay.
    fn next_pending(&self) -> Option<&Scanned> {
        let back = self.pending.checked_sub(1)?;
        Some(&self.buf[(self.index + BUFFER_SIZE - back) % BUFFER_SIZE])
    }

    fn current(&self) -> &Scanned {
        &self.buf[(self.index + BUFFER_SIZE - self.pending) % BUFFER_SIZE]
    }
}

impl<I: Iterator<Item = char>> From<Scanner<I>> for BufScanner<I> {
    fn from(scanner: Scanner<I>) -> Self {
        Self::new(scanner)
    }
}
