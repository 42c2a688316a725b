//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Pos;

/// Fluent builder for [`Diagnostic`] values
///
/// # Examples
///
/// ```
/// use esql_util::{DiagnosticBuilder, DiagnosticCode, Handler, Pos};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("invalid escape sequence '\\g'")
///     .code(DiagnosticCode::E_SCAN_INVALID_ESCAPE)
///     .pos(Pos::new(0, 5))
///     .help("supported escapes are \\n, \\\\ and the quote character")
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start a diagnostic at the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, Pos::ZERO),
        }
    }

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the source position
    pub fn pos(mut self, pos: Pos) -> Self {
        self.diagnostic.pos = pos;
        self
    }

    /// Attach a help message
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Build and hand the diagnostic to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
