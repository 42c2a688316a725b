//! Scanner module.
//!
//! The scanner is split by token category:
//! - `core` - `Scanner` struct, constructors and dispatch
//! - `whitespace` - whitespace runs
//! - `string` - quoted literals, plus the standalone decoder and encoder
//! - `number` - integer and float literals
//! - `identifier` - identifiers and keywords
//! - `operator` - operators and punctuation
//! - `regex` - the explicit `/.../` entry point

mod core;
mod identifier;
mod number;
mod operator;
mod regex;
mod string;
mod whitespace;

pub use self::core::{IntoTokens, Scanned, Scanner, Tokens};
pub use self::string::{decode_quoted_string, quote_string};
