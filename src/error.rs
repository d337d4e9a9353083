//! Crate-level error types.
//!
//! Only persistence surfaces errors. Navigation, editing and playback
//! operations absorb malformed input as no-ops.

use std::fmt;

/// Errors produced by the vista crate.
#[derive(Debug)]
pub enum VistaError {
    /// Generic I/O failure (missing or unreadable file).
    Io(std::io::Error),
    /// A path or tour document could not be decoded.
    DocumentParse(String),
    /// A path document could not be encoded.
    DocumentSerialize(String),
    /// A motion-capture line could not be parsed.
    MovParse {
        /// 1-based line number of the offending sample.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VistaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DocumentParse(msg) => {
                write!(f, "document parse error: {msg}")
            }
            Self::DocumentSerialize(msg) => {
                write!(f, "document serialize error: {msg}")
            }
            Self::MovParse { line, message } => {
                write!(f, "motion capture parse error on line {line}: {message}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VistaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VistaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mov_error_names_the_line() {
        let err = VistaError::MovParse {
            line: 7,
            message: "expected 6 fields".into(),
        };
        assert_eq!(
            err.to_string(),
            "motion capture parse error on line 7: expected 6 fields"
        );
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;

        let err = VistaError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "path.toml",
        ));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
