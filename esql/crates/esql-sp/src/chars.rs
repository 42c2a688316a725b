//! Character classes used by the scanner's dispatch.
//!
//! Every function here expects line-terminator normalized input, so `'\r'`
//! never needs a case of its own.

/// Space, tab or (normalized) line feed.
///
/// # Example
///
/// ```
/// use esql_sp::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\n'));
/// assert!(!is_whitespace('\u{a0}'));
/// ```
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

/// Letters (including non-ASCII letters).
#[inline]
pub fn is_letter(ch: char) -> bool {
    ch.is_alphabetic()
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// A character that may start an identifier: a letter, `_` or `@`.
///
/// # Example
///
/// ```
/// use esql_sp::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('@'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(ch: char) -> bool {
    is_letter(ch) || ch == '_' || ch == '@'
}

/// A character that may continue an identifier: a letter, digit or `_`.
///
/// `@` is only allowed in first position.
#[inline]
pub fn is_ident_continue(ch: char) -> bool {
    is_letter(ch) || is_digit(ch) || ch == '_'
}

/// The two string delimiters.
#[inline]
pub fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}
