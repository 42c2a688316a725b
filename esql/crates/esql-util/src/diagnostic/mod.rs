//! Diagnostics: error and warning reports collected while scanning.
//!
//! Stages report problems into a [`Handler`], which simply collects them.
//! Reporting never aborts the stage that found the problem; the caller looks
//! at the handler afterwards.
//!
//! # Examples
//!
//! ```
//! use esql_util::diagnostic::{Diagnostic, Handler};
//! use esql_util::Pos;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error("unterminated string literal", Pos::new(0, 3)));
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Pos;
use std::cell::RefCell;
use std::fmt;

/// How serious a report is.
///
/// # Examples
///
/// ```
/// use esql_util::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Malformed input
    Error,
    /// Suspicious but tolerated input or API use
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// One report: severity, message, source position and optional code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious a report is.
    pub level: Level,
    /// Human-readable description.
    pub message: String,
    /// Where the offending token starts
    pub pos: Pos,
    /// Stable identifier, when one applies.
    pub code: Option<DiagnosticCode>,
    /// Suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Builds a report at `pos`.
    pub fn new(level: Level, message: impl Into<String>, pos: Pos) -> Self {
        Self {
            level,
            message: message.into(),
            pos,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Error-level shorthand for [`Diagnostic::new`].
    pub fn error(message: impl Into<String>, pos: Pos) -> Self {
        Self::new(Level::Error, message, pos)
    }

    /// Warning-level shorthand for [`Diagnostic::new`].
    pub fn warning(message: impl Into<String>, pos: Pos) -> Self {
        Self::new(Level::Warning, message, pos)
    }

    /// Add a diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help message
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

/// Renders `error[E1002]: unterminated string literal at line 1, char 4`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {} at {}", self.message, self.pos)?;
        for help in &self.helps {
            write!(f, "\n  help: {}", help)?;
        }
        Ok(())
    }
}

/// Collects diagnostics reported during a stage
///
/// Uses interior mutability so reporting only needs `&self`.
///
/// # Examples
///
/// ```
/// use esql_util::diagnostic::{Diagnostic, Handler};
/// use esql_util::Pos;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("odd", Pos::ZERO));
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// An empty handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Records a finished report.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Start an error diagnostic at `pos`
    pub fn build_error(&self, pos: Pos, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).pos(pos)
    }

    /// Start a warning diagnostic at `pos`
    pub fn build_warning(&self, pos: Pos, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).pos(pos)
    }

    /// Returns true once at least one error-level report was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of error-level reports.
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Number of warning-level reports.
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics, in report order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Drops every recorded report.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
