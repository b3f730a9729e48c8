//! Error types

use std::io;

use thiserror::Error;

/// A malformed source document, in either dialect.
///
/// There is no partial result: any `FormatError` aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{message}")]
    Document { message: String },

    /// `line` is 1-based and counts blank lines of the input
    #[error("line {line}: {message}")]
    Line { line: usize, message: String },
}

impl FormatError {
    pub fn document(message: impl Into<String>) -> Self {
        FormatError::Document {
            message: message.into(),
        }
    }

    pub fn at_line(line: usize, message: impl Into<String>) -> Self {
        FormatError::Line {
            line,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FormatError::Document { message } | FormatError::Line { message, .. } => message,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            FormatError::Document { .. } => None,
            FormatError::Line { line, .. } => Some(*line),
        }
    }
}

/// Errors surfaced by the command-line tool
#[derive(Debug, Error)]
pub enum RackError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
