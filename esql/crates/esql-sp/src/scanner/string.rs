//! Quoted string literals.
//!
//! Both the token scanner and [`decode_quoted_string`] read literals through
//! [`read_quoted`], so the two always agree on escapes and termination.

use esql_util::Pos;

use super::core::{Scanned, Scanner};
use crate::cursor::Cursor;
use crate::error::{StringError, StringResult};
use crate::token::Token;

/// How a quoted literal ended.
enum Quoted {
    /// Closing quote found; decoded content.
    Closed(String),
    /// Input or line ended first; content decoded so far.
    Unterminated(String),
    /// Unsupported escape; the sequence and the position of its backslash.
    BadEscape { sequence: String, at: Pos },
}

/// Reads a literal body after its opening `quote` has been consumed.
///
/// A raw line terminator ends the literal without being consumed.
fn read_quoted<I: Iterator<Item = char>>(cursor: &mut Cursor<I>, quote: char) -> Quoted {
    let mut content = String::new();

    loop {
        let at = cursor.pos();
        match cursor.read() {
            None => return Quoted::Unterminated(content),
            Some(ch) if ch == quote => return Quoted::Closed(content),
            Some('\n') => {
                cursor.unread();
                return Quoted::Unterminated(content);
            },
            Some('\\') => match cursor.read() {
                None => return Quoted::Unterminated(content),
                Some('n') => content.push('\n'),
                Some('\\') => content.push('\\'),
                Some(ch) if ch == quote => content.push(ch),
                Some(ch) => {
                    return Quoted::BadEscape {
                        sequence: format!("\\{}", ch),
                        at,
                    }
                },
            },
            Some(ch) => content.push(ch),
        }
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scans a string literal whose opening `quote` was just consumed.
    ///
    /// Returns `String` with the decoded content, `BadString` with the
    /// partial content (positioned at the opening quote), or `BadEscape`
    /// with the offending sequence (positioned at its backslash).
    pub(crate) fn scan_string(&mut self, quote: char) -> Scanned {
        match read_quoted(&mut self.cursor, quote) {
            Quoted::Closed(content) => self.token(Token::String, content),
            Quoted::Unterminated(partial) => self.token(Token::BadString, partial),
            Quoted::BadEscape { sequence, at } => (Token::BadEscape, at, sequence),
        }
    }
}

/// Decodes a quoted literal without building a scanner.
///
/// The first character of `input` is taken as the delimiter. Anything after
/// the closing delimiter is ignored.
///
/// # Errors
///
/// [`StringError::Unterminated`] (`bad string`) if the input or the line ends
/// before the closing delimiter, [`StringError::BadEscape`] (`bad escape`)
/// for a backslash followed by anything other than `n`, `\` or the delimiter.
///
/// # Examples
///
/// ```
/// use esql_sp::{decode_quoted_string, StringError};
///
/// assert_eq!(decode_quoted_string(r#""foo\"bar""#).unwrap(), "foo\"bar");
/// assert_eq!(
///     decode_quoted_string(r#""foo\xbar""#).unwrap_err(),
///     StringError::BadEscape { sequence: r"\x".to_string() }
/// );
/// ```
pub fn decode_quoted_string(input: &str) -> StringResult<String> {
    let mut cursor = Cursor::new(input.chars());
    let quote = match cursor.read() {
        Some(quote) => quote,
        None => {
            return Err(StringError::Unterminated {
                partial: String::new(),
            })
        },
    };

    match read_quoted(&mut cursor, quote) {
        Quoted::Closed(content) => Ok(content),
        Quoted::Unterminated(partial) => Err(StringError::Unterminated { partial }),
        Quoted::BadEscape { sequence, .. } => Err(StringError::BadEscape { sequence }),
    }
}

/// Wraps `text` in `quote`, escaping backslashes, newlines and the quote.
///
/// The result decodes back to `text` for any `text` free of carriage
/// returns, which have no escape and always end a literal.
///
/// ```
/// use esql_sp::{decode_quoted_string, quote_string};
///
/// let quoted = quote_string("it's\\here", '\'');
/// assert_eq!(quoted, r"'it\'s\\here'");
/// assert_eq!(decode_quoted_string(&quoted).unwrap(), "it's\\here");
/// ```
pub fn quote_string(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            },
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
