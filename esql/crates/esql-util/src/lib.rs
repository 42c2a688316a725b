//! esql-util - Shared foundation types for the esql query pipeline
//!
//! This crate holds the small set of types every esql stage agrees on:
//!
//! - [`Pos`] - a zero-based `(line, column)` source position
//! - [`Diagnostic`] / [`Handler`] - collected error and warning reports
//! - [`DiagnosticCode`] - stable identifiers for diagnostics
//!
//! The scanner reports malformed input through a [`Handler`] while still
//! returning the malformed token, so a parser can decide for itself whether
//! the problem is fatal.
//!
//! # Example
//!
//! ```
//! use esql_util::{DiagnosticBuilder, DiagnosticCode, Handler, Pos};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_SCAN_UNEXPECTED_CHAR)
//!     .pos(Pos::new(0, 7))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].pos, Pos::new(0, 7));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod pos;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use pos::Pos;
