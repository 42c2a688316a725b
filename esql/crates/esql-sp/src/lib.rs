//! esql-sp - Scanner for the esql query language
//!
//! This crate turns query text into a stream of classified tokens for the
//! esql parser. Every token comes with the zero-based position of its first
//! character and its literal text.
//!
//! # Example Usage
//!
//! ```
//! use esql_sp::{Scanner, Token};
//! use esql_util::Pos;
//!
//! let mut scanner = Scanner::new("SELECT value FROM cpu WHERE host = 'a'");
//!
//! // One triple at a time
//! assert_eq!(scanner.scan(), (Token::Select, Pos::new(0, 0), String::new()));
//!
//! // Or iterate up to end of input
//! let rest: Vec<Token> = scanner.tokens().map(|(token, _, _)| token).collect();
//! assert_eq!(rest.last(), Some(&Token::String));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token categories and keyword lookup
//! - [`scanner`] - The scanner and its per-category sub-scanners
//! - [`buffered`] - Token-level lookahead for parsers
//! - [`cursor`] - Character cursor with line-terminator normalization
//! - [`chars`] - Character classes
//! - [`config`] - Scanner configuration
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Matched case-insensitively and returned with an empty literal:
//! `AS`, `ASC`, `BY`, `DESC`, `FROM`, `GROUP`, `HAVING`, `LIMIT`, `ORDER`,
//! `SELECT`, `WHERE`, `AND`, `OR`, `TRUE`, `FALSE`
//!
//! ## Literals
//!
//! - **Identifier**: `value`, `_tmp`, `@param` (spelling preserved)
//! - **Integer**: `42`, `007`
//! - **Float**: `3.14`, `10.`
//! - **String**: `'a'`, `"it\"s"` (escapes `\n`, `\\` and the enclosing quote)
//! - **Regex**: `/^cpu\d+/`, only through [`Scanner::scan_regex`]
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison**: `=`, `<>`, `<`, `<=`, `>`, `>=`
//! - **Regex match**: `=~`, `!~`
//! - **Punctuation**: `(`, `)`, `,`, `.`
//!
//! ## Special
//!
//! - **Eof**: end of input, returned forever once reached
//! - **Whitespace**: spaces, tabs and normalized line terminators
//! - **Illegal**, **BadString**, **BadEscape**: malformed input

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffered;
pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use buffered::BufScanner;
pub use config::ScannerConfig;
pub use cursor::{Cursor, OwnedChars};
pub use error::{ConfigError, ScanError, StringError};
pub use scanner::{decode_quoted_string, quote_string, IntoTokens, Scanned, Scanner, Tokens};
pub use token::{keyword_from_ident, Token};
