//! Scanner configuration.
//!
//! Configuration is a plain serde struct with documented defaults. It can be
//! built in code or loaded from a `[scanner]`-style TOML table.
//!
//! # Examples
//!
//! ```
//! use esql_sp::ScannerConfig;
//!
//! let config = ScannerConfig::from_toml("skip_whitespace = true").unwrap();
//! assert!(config.skip_whitespace);
//! assert!(config.report_diagnostics);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Options that change what the scanner hands back.
///
/// Neither option changes how input is classified: the same characters
/// always produce the same tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Consume whitespace runs silently instead of returning `Whitespace`
    /// tokens from `scan()`.
    ///
    /// Default: false
    #[serde(default)]
    pub skip_whitespace: bool,

    /// Record a diagnostic for every `Illegal`, `BadString` and `BadEscape`
    /// token, in addition to returning the token.
    ///
    /// Default: true
    #[serde(default = "default_true")]
    pub report_diagnostics: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            skip_whitespace: false,
            report_diagnostics: true,
        }
    }
}

impl ScannerConfig {
    /// Parses a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Returns a copy with `skip_whitespace` set.
    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.skip_whitespace = skip;
        self
    }

    /// Returns a copy with `report_diagnostics` set.
    pub fn report_diagnostics(mut self, report: bool) -> Self {
        self.report_diagnostics = report;
        self
    }
}
