//! Error types for esql-sp.
//!
//! Malformed query text is *not* an error here: the scanner reports it as
//! `BadString`, `BadEscape` or `Illegal` tokens. The types below cover the
//! fail-fast string decoder and the fallible edges of the crate (reading
//! input, loading configuration).

use thiserror::Error;

/// Failure of [`decode_quoted_string`](crate::decode_quoted_string).
///
/// The `Display` text is exactly `bad string` or `bad escape`, so callers can
/// surface it verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StringError {
    /// End of input or a raw line terminator came before the closing quote.
    #[error("bad string")]
    Unterminated {
        /// Content decoded before the literal ran out.
        partial: String,
    },

    /// A backslash was followed by a character with no escape meaning.
    #[error("bad escape")]
    BadEscape {
        /// The offending two-character sequence, e.g. `\x`.
        sequence: String,
    },
}

impl StringError {
    /// The text the decoder had produced when it stopped: the partial content
    /// for an unterminated literal, the escape sequence for a bad escape.
    pub fn text(&self) -> &str {
        match self {
            StringError::Unterminated { partial } => partial,
            StringError::BadEscape { sequence } => sequence,
        }
    }
}

/// Failure to obtain query text from an I/O source.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The reader failed.
    #[error("failed to read query text: {0}")]
    Io(#[from] std::io::Error),

    /// The reader produced bytes that are not UTF-8.
    #[error("query text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Failure to load a [`ScannerConfig`](crate::ScannerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document did not parse or did not match the schema.
    #[error("invalid scanner configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for string decoding.
pub type StringResult<T> = std::result::Result<T, StringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_error_display() {
        let unterminated = StringError::Unterminated {
            partial: "foo".to_string(),
        };
        assert_eq!(unterminated.to_string(), "bad string");

        let bad_escape = StringError::BadEscape {
            sequence: "\\x".to_string(),
        };
        assert_eq!(bad_escape.to_string(), "bad escape");
    }

    #[test]
    fn test_string_error_text() {
        let err = StringError::BadEscape {
            sequence: "\\q".to_string(),
        };
        assert_eq!(err.text(), "\\q");
    }

    #[test]
    fn test_scan_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err: ScanError = io.into();
        assert!(err.to_string().starts_with("failed to read query text"));
    }

    #[test]
    fn test_scan_error_from_utf8() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ScanError = bad.into();
        assert!(matches!(err, ScanError::InvalidUtf8(_)));
    }
}
