//! Diagnostic codes for categorizing scanner errors and warnings.
//!
//! # Examples
//!
//! ```
//! use esql_util::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_SCAN_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}`, where the prefix is `E` for
/// errors or `W` for warnings and the number is zero-padded to four digits.
/// The 1xxx range belongs to the scanner.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (`E` for error, `W` for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use esql_util::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 42);
    /// assert_eq!(code.as_str(), "E0042");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Render the code, e.g. `E1001`
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Returns true for error codes
    #[inline]
    pub fn is_error(&self) -> bool {
        self.prefix == "E"
    }

    /// E1001: a character that starts no token
    pub const E_SCAN_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: a quoted string without its closing quote
    pub const E_SCAN_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: an unsupported backslash escape in a string
    pub const E_SCAN_INVALID_ESCAPE: Self = Self::new("E", 1003);

    /// W1001: regex scan requested away from a `/`
    pub const W_SCAN_NOT_A_REGEX: Self = Self::new("W", 1001);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
