//! Token definitions.
//!
//! A [`Token`] is only the category of what was recognized. The text that
//! goes with it (identifier name, decoded string, digits) travels separately
//! as the literal returned next to it by the scanner, which keeps `Token`
//! small and `Copy`.

use std::fmt;

/// The closed set of token categories produced by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    // Special tokens
    /// End of input
    Eof,
    /// A character that starts no token
    Illegal,
    /// A run of spaces, tabs and line terminators
    Whitespace,

    // Literals
    /// Identifier, e.g. `value`, `_foo`, `@bar`
    Ident,
    /// Quoted string, e.g. `'b'` or `"foo"`
    String,
    /// Quoted string missing its closing quote
    BadString,
    /// Quoted string containing an unsupported escape
    BadEscape,
    /// Digits only, e.g. `100`
    Integer,
    /// Digits with a fractional part, e.g. `10.3`
    Float,
    /// `TRUE`
    True,
    /// `FALSE`
    False,
    /// Regular expression body, e.g. `/^cpu/`
    Regex,

    // Operators
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `=`
    Eq,
    /// `<>`
    Neq,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `=~`
    EqRegex,
    /// `!~`
    NeqRegex,

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `.`
    Dot,

    // Keywords
    /// `AS`
    As,
    /// `ASC`
    Asc,
    /// `BY`
    By,
    /// `DESC`
    Desc,
    /// `FROM`
    From,
    /// `GROUP`
    Group,
    /// `HAVING`
    Having,
    /// `LIMIT`
    Limit,
    /// `ORDER`
    Order,
    /// `SELECT`
    Select,
    /// `WHERE`
    Where,
}

impl Token {
    /// Every token recognized by [`Token::lookup`] instead of [`Token::Ident`].
    pub const KEYWORDS: [Token; 15] = [
        Token::As,
        Token::Asc,
        Token::By,
        Token::Desc,
        Token::From,
        Token::Group,
        Token::Having,
        Token::Limit,
        Token::Order,
        Token::Select,
        Token::Where,
        Token::And,
        Token::Or,
        Token::True,
        Token::False,
    ];

    /// Classifies identifier-shaped text.
    ///
    /// Keywords match case-insensitively; anything else is an identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use esql_sp::Token;
    ///
    /// assert_eq!(Token::lookup("SeLeCt"), Token::Select);
    /// assert_eq!(Token::lookup("Foo_1"), Token::Ident);
    /// ```
    pub fn lookup(ident: &str) -> Token {
        keyword_from_ident(ident).unwrap_or(Token::Ident)
    }

    /// The canonical text for operators and keywords, or the category name
    /// for everything else.
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Eof => "EOF",
            Token::Illegal => "ILLEGAL",
            Token::Whitespace => "WS",
            Token::Ident => "IDENT",
            Token::String => "STRING",
            Token::BadString => "BADSTRING",
            Token::BadEscape => "BADESCAPE",
            Token::Integer => "INTEGER",
            Token::Float => "FLOAT",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::Regex => "REGEX",
            Token::Add => "+",
            Token::Sub => "-",
            Token::Mul => "*",
            Token::Div => "/",
            Token::And => "AND",
            Token::Or => "OR",
            Token::Eq => "=",
            Token::Neq => "<>",
            Token::Lt => "<",
            Token::Lte => "<=",
            Token::Gt => ">",
            Token::Gte => ">=",
            Token::EqRegex => "=~",
            Token::NeqRegex => "!~",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Comma => ",",
            Token::Dot => ".",
            Token::As => "AS",
            Token::Asc => "ASC",
            Token::By => "BY",
            Token::Desc => "DESC",
            Token::From => "FROM",
            Token::Group => "GROUP",
            Token::Having => "HAVING",
            Token::Limit => "LIMIT",
            Token::Order => "ORDER",
            Token::Select => "SELECT",
            Token::Where => "WHERE",
        }
    }

    /// Returns true for reserved words, including `AND`, `OR`, `TRUE` and `FALSE`.
    pub fn is_keyword(&self) -> bool {
        Self::KEYWORDS.contains(self)
    }

    /// Returns true for binary operators.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Add
                | Token::Sub
                | Token::Mul
                | Token::Div
                | Token::And
                | Token::Or
                | Token::Eq
                | Token::Neq
                | Token::Lt
                | Token::Lte
                | Token::Gt
                | Token::Gte
                | Token::EqRegex
                | Token::NeqRegex
        )
    }

    /// Returns true for tokens that carry a value in their literal, plus the
    /// boolean keywords.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::Ident
                | Token::String
                | Token::Integer
                | Token::Float
                | Token::True
                | Token::False
                | Token::Regex
        )
    }

    /// Returns true for the tokens that signal malformed input.
    pub fn is_error(&self) -> bool {
        matches!(self, Token::Illegal | Token::BadString | Token::BadEscape)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps identifier text to a keyword token, ignoring ASCII case.
///
/// Returns `None` for ordinary identifiers.
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    // Longest keyword is HAVING/SELECT; skip the allocation for anything longer.
    if ident.len() > 6 {
        return None;
    }
    let upper = ident.to_ascii_uppercase();
    let token = match upper.as_str() {
        "AS" => Token::As,
        "ASC" => Token::Asc,
        "BY" => Token::By,
        "DESC" => Token::Desc,
        "FROM" => Token::From,
        "GROUP" => Token::Group,
        "HAVING" => Token::Having,
        "LIMIT" => Token::Limit,
        "ORDER" => Token::Order,
        "SELECT" => Token::Select,
        "WHERE" => Token::Where,
        "AND" => Token::And,
        "OR" => Token::Or,
        "TRUE" => Token::True,
        "FALSE" => Token::False,
        _ => return None,
    };
    Some(token)
}
