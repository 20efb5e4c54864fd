//! Parse error types for catalogs.

use thiserror::Error;

/// An error that occurred while parsing a catalog.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}
