//! Diagnostics produced while parsing, and vocabulary validation errors.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a script line could not become a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseErrorKind {
    #[error("missing arguments")]
    MissingArguments,
    #[error("unknown command")]
    UnknownCommand,
    #[error("unknown options")]
    UnknownOptions,
}

/// A diagnostic tied to one line of the script.
///
/// `Display` renders the two-line report:
///
/// ```text
/// unknown command
/// 3 | frobnicate 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize)]
#[error("{kind}\n{line_number} | {line}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based, counting skipped lines.
    pub line_number: usize,
    /// The offending line, verbatim.
    pub line: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line_number: usize, line: impl Into<String>) -> Self {
        Self {
            kind,
            line_number,
            line: line.into(),
        }
    }
}

/// Every diagnostic from a script that failed to parse.
///
/// Returned by [`ParseOutput::into_result`](crate::ParseOutput::into_result)
/// when at least one line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub(crate) Vec<ParseError>);

impl ParseErrors {
    /// The diagnostics, in source line order.
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }

    /// Take ownership of the diagnostics.
    pub fn into_vec(self) -> Vec<ParseError> {
        self.0
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

/// A keyword table or option set that cannot be used for parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("keyword for '{0}' is empty")]
    EmptyKeyword(crate::CommandType),
    #[error("keyword '{keyword}' can never match: '{by}' is checked first")]
    Shadowed { keyword: String, by: String },
    #[error("option name '{0}' is empty or contains whitespace")]
    InvalidOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format() {
        let err = ParseError::new(ParseErrorKind::UnknownCommand, 3, "frobnicate 5");
        assert_eq!(err.to_string(), "unknown command\n3 | frobnicate 5");
    }

    #[test]
    fn test_kind_messages() {
        assert_eq!(ParseErrorKind::MissingArguments.to_string(), "missing arguments");
        assert_eq!(ParseErrorKind::UnknownOptions.to_string(), "unknown options");
    }

    #[test]
    fn test_errors_joined_with_blank_line() {
        let errs = ParseErrors(vec![
            ParseError::new(ParseErrorKind::MissingArguments, 1, "type"),
            ParseError::new(ParseErrorKind::UnknownOptions, 4, "set bogus 1"),
        ]);
        assert_eq!(
            errs.to_string(),
            "missing arguments\n1 | type\n\nunknown options\n4 | set bogus 1"
        );
    }
}
