//! Character cursor for traversing query text.
//!
//! The [`Cursor`] reads characters from any `char` iterator, normalizes line
//! terminators, tracks the zero-based [`Pos`] of the next character, and
//! supports pushing back exactly one character.
//!
//! # Line terminators
//!
//! `\r\n`, a lone `\r` and a lone `\n` each come out of the cursor as a
//! single `'\n'`. Normalization is a two-state machine: after a `\r` the
//! cursor reads one more raw character; a `\n` is folded into the terminator,
//! anything else is parked in a carry slot and reprocessed on the next read.
//! Callers never see a `'\r'`.

use esql_util::Pos;

/// A cursor over a character source with single-character pushback.
///
/// # Example
///
/// ```
/// use esql_sp::cursor::Cursor;
/// use esql_util::Pos;
///
/// let mut cursor = Cursor::new("a\r\nb".chars());
/// assert_eq!(cursor.read(), Some('a'));
/// assert_eq!(cursor.read(), Some('\n'));
/// assert_eq!(cursor.pos(), Pos::new(1, 0));
///
/// assert_eq!(cursor.read(), Some('b'));
/// cursor.unread();
/// assert_eq!(cursor.pos(), Pos::new(1, 0));
/// assert_eq!(cursor.read(), Some('b'));
/// assert_eq!(cursor.read(), None);
/// ```
pub struct Cursor<I> {
    /// The raw character source.
    source: I,

    /// Raw character read past a lone `\r`, waiting to be reprocessed.
    carry: Option<char>,

    /// Last normalized character handed out, with the position it started at.
    last: Option<(char, Pos)>,

    /// Whether `last` has been pushed back and is the next character to read.
    pushed_back: bool,

    /// Position of the next character.
    pos: Pos,
}

impl<I: Iterator<Item = char>> Cursor<I> {
    /// Creates a cursor positioned at the first character of `source`.
    pub fn new(source: I) -> Self {
        Self {
            source,
            carry: None,
            last: None,
            pushed_back: false,
            pos: Pos::ZERO,
        }
    }

    /// Reads the next normalized character, or `None` at end of input.
    ///
    /// Reading at end of input leaves the position unchanged, so the end
    /// position is stable no matter how often it is called.
    pub fn read(&mut self) -> Option<char> {
        if self.pushed_back {
            self.pushed_back = false;
            let (ch, start) = self.last?;
            self.pos = start.after(ch);
            return Some(ch);
        }

        let ch = self.next_normalized()?;
        let start = self.pos;
        self.pos.advance(ch);
        self.last = Some((ch, start));
        Some(ch)
    }

    /// Pushes the most recently read character back.
    ///
    /// Only one character can be pushed back at a time, and only after a
    /// [`read`](Self::read) that returned `Some`.
    pub fn unread(&mut self) {
        debug_assert!(!self.pushed_back, "only one character of pushback");
        if let Some((_, start)) = self.last {
            self.pushed_back = true;
            self.pos = start;
        }
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let ch = self.read();
        if ch.is_some() {
            self.unread();
        }
        ch
    }

    /// Consumes the next character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use esql_sp::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=".chars());
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('>'));
    /// assert!(cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        match self.read() {
            Some(ch) if ch == expected => true,
            Some(_) => {
                self.unread();
                false
            },
            None => false,
        }
    }

    /// Returns true if no characters remain.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Returns the position of the next character.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    fn next_raw(&mut self) -> Option<char> {
        self.carry.take().or_else(|| self.source.next())
    }

    fn next_normalized(&mut self) -> Option<char> {
        match self.next_raw()? {
            '\r' => {
                match self.next_raw() {
                    Some('\n') | None => {},
                    Some(other) => self.carry = Some(other),
                }
                Some('\n')
            },
            ch => Some(ch),
        }
    }
}

/// A `char` iterator that owns its `String`.
///
/// Lets a scanner outlive the buffer it was read into without keeping a
/// second, decoded copy of the text.
///
/// ```
/// use esql_sp::cursor::OwnedChars;
///
/// let chars: String = OwnedChars::new("añb".to_string()).collect();
/// assert_eq!(chars, "añb");
/// ```
#[derive(Debug, Clone)]
pub struct OwnedChars {
    text: String,
    offset: usize,
}

impl OwnedChars {
    /// Iterates over the characters of `text`.
    pub fn new(text: String) -> Self {
        Self { text, offset: 0 }
    }
}

impl Iterator for OwnedChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.text.get(self.offset..)?.chars().next()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }
}
