//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its constructors and the
//! dispatch on the leading character of each token.

use std::io::Read;
use std::str::Chars;

use esql_util::{DiagnosticBuilder, DiagnosticCode, Handler, Pos};
use log::{debug, trace};

use crate::chars::{is_digit, is_ident_start, is_quote, is_whitespace};
use crate::config::ScannerConfig;
use crate::cursor::{Cursor, OwnedChars};
use crate::error::ScanError;
use crate::token::Token;

/// One scanned token: its category, the position of its first character and
/// its literal text.
pub type Scanned = (Token, Pos, String);

/// Scanner for esql query text.
///
/// The scanner turns a character source into `(Token, Pos, String)` triples.
/// Malformed input never fails a scan: it comes back as an `Illegal`,
/// `BadString` or `BadEscape` token, and (unless disabled in the
/// [`ScannerConfig`]) is also recorded as a diagnostic.
///
/// # Example
///
/// ```
/// use esql_sp::{Scanner, Token};
/// use esql_util::Pos;
///
/// let mut scanner = Scanner::new("SELECT a");
/// assert_eq!(scanner.scan(), (Token::Select, Pos::new(0, 0), String::new()));
/// assert_eq!(scanner.scan(), (Token::Whitespace, Pos::new(0, 6), " ".to_string()));
/// assert_eq!(scanner.scan(), (Token::Ident, Pos::new(0, 7), "a".to_string()));
/// assert_eq!(scanner.scan().0, Token::Eof);
/// ```
pub struct Scanner<I> {
    /// Character cursor with line-terminator normalization and pushback.
    pub(crate) cursor: Cursor<I>,

    /// Behavior switches.
    config: ScannerConfig,

    /// Diagnostics for malformed tokens.
    pub(crate) handler: Handler,

    /// Position of the first character of the token being scanned.
    pub(crate) token_start: Pos,
}

impl<'a> Scanner<Chars<'a>> {
    /// Creates a scanner over query text with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::from_chars(source.chars())
    }

    /// Creates a scanner over query text with the given configuration.
    pub fn with_config(source: &'a str, config: ScannerConfig) -> Self {
        Self::from_chars_with_config(source.chars(), config)
    }
}

impl Scanner<OwnedChars> {
    /// Reads all of `reader` and creates a scanner over it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if the reader fails and
    /// [`ScanError::InvalidUtf8`] if its bytes are not UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ScanError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Ok(Self::from_chars(OwnedChars::new(text)))
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Creates a scanner over any character source.
    pub fn from_chars<T>(chars: T) -> Self
    where
        T: IntoIterator<Item = char, IntoIter = I>,
    {
        Self::from_chars_with_config(chars, ScannerConfig::default())
    }

    /// Creates a scanner over any character source with the given configuration.
    pub fn from_chars_with_config<T>(chars: T, config: ScannerConfig) -> Self
    where
        T: IntoIterator<Item = char, IntoIter = I>,
    {
        Self {
            cursor: Cursor::new(chars.into_iter()),
            config,
            handler: Handler::new(),
            token_start: Pos::ZERO,
        }
    }

    /// Returns the next token, its starting position and its literal.
    ///
    /// Once the input is exhausted every call returns `Token::Eof` at the
    /// same position.
    pub fn scan(&mut self) -> Scanned {
        loop {
            let scanned = self.scan_token();
            if scanned.0 == Token::Whitespace && self.config.skip_whitespace {
                continue;
            }
            self.finish(&scanned);
            return scanned;
        }
    }

    /// Dispatches on the leading character.
    fn scan_token(&mut self) -> Scanned {
        self.token_start = self.cursor.pos();

        let ch = match self.cursor.read() {
            Some(ch) => ch,
            None => return self.token(Token::Eof, String::new()),
        };

        match ch {
            c if is_whitespace(c) => {
                self.cursor.unread();
                self.scan_whitespace()
            },
            c if is_quote(c) => self.scan_string(c),
            c if is_digit(c) => {
                self.cursor.unread();
                self.scan_number()
            },
            c if is_ident_start(c) => {
                self.cursor.unread();
                self.scan_identifier()
            },
            c => self.scan_operator(c),
        }
    }

    /// Builds a triple positioned at the current token start.
    pub(crate) fn token(&self, token: Token, literal: String) -> Scanned {
        (token, self.token_start, literal)
    }

    /// Appends characters to `buf` while `pred` holds. The first failing
    /// character is left unread.
    pub(crate) fn eat_while(&mut self, buf: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.cursor.read() {
            if !pred(ch) {
                self.cursor.unread();
                break;
            }
            buf.push(ch);
        }
    }

    /// Logs a scanned token and records a diagnostic if it is malformed.
    pub(crate) fn finish(&self, scanned: &Scanned) {
        let (token, pos, literal) = scanned;
        trace!("scanned {} {:?} at {}", token, literal, pos);

        if !token.is_error() {
            return;
        }
        debug!("malformed token {} {:?} at {}", token, literal, pos);

        if !self.config.report_diagnostics {
            return;
        }

        let builder = match token {
            Token::Illegal => {
                DiagnosticBuilder::error(format!("unexpected character '{}'", literal))
                    .code(DiagnosticCode::E_SCAN_UNEXPECTED_CHAR)
            },
            Token::BadString => DiagnosticBuilder::error("unterminated string literal")
                .code(DiagnosticCode::E_SCAN_UNTERMINATED_STRING),
            Token::BadEscape => {
                DiagnosticBuilder::error(format!("invalid escape sequence '{}'", literal))
                    .code(DiagnosticCode::E_SCAN_INVALID_ESCAPE)
                    .help("supported escapes are \\n, \\\\ and the enclosing quote")
            },
            _ => return,
        };
        builder.pos(*pos).emit(&self.handler);
    }

    /// Iterates over the remaining tokens, stopping before `Token::Eof`.
    ///
    /// The scanner stays usable once the iterator is dropped.
    pub fn tokens(&mut self) -> Tokens<'_, I> {
        Tokens { scanner: self }
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &Handler {
        &self.handler
    }

    /// The active configuration.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Position of the next unread character.
    pub fn pos(&self) -> Pos {
        self.cursor.pos()
    }
}

/// Borrowing token iterator returned by [`Scanner::tokens`].
pub struct Tokens<'a, I> {
    scanner: &'a mut Scanner<I>,
}

impl<I: Iterator<Item = char>> Iterator for Tokens<'_, I> {
    type Item = Scanned;

    fn next(&mut self) -> Option<Self::Item> {
        non_eof(self.scanner.scan())
    }
}

/// Owning token iterator returned by `Scanner::into_iter`.
pub struct IntoTokens<I> {
    scanner: Scanner<I>,
}

impl<I> IntoTokens<I> {
    /// Gives back the scanner, for instance to read its diagnostics.
    pub fn into_inner(self) -> Scanner<I> {
        self.scanner
    }
}

impl<I: Iterator<Item = char>> Iterator for IntoTokens<I> {
    type Item = Scanned;

    fn next(&mut self) -> Option<Self::Item> {
        non_eof(self.scanner.scan())
    }
}

impl<I: Iterator<Item = char>> IntoIterator for Scanner<I> {
    type Item = Scanned;
    type IntoIter = IntoTokens<I>;

    fn into_iter(self) -> Self::IntoIter {
        IntoTokens { scanner: self }
    }
}

fn non_eof(scanned: Scanned) -> Option<Scanned> {
    if scanned.0 == Token::Eof {
        None
    } else {
        Some(scanned)
    }
}
