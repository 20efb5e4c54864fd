//! Miette diagnostic wrapper for catalog syntax errors.

use std::path::Path;

use locfmt::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for catalog syntax errors.
///
/// Fields are read by the miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(locfmt::syntax))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let ParseError::Syntax {
            line,
            column,
            message,
        } = err;
        Self::at(path, content, *line, *column, message.clone())
    }

    /// Create a diagnostic pointing at a one-based line and column.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        let help = message
            .starts_with("expected a catalog entry")
            .then(|| "entries are `msgctxt`, `msgid`, `msgid_plural` and `msgstr` lines".to_string());
        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message,
            help,
        }
    }
}

/// Convert a one-based line and character column to a byte offset, clamped
/// to the content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let column_offset: usize = content[line_start.min(content.len())..]
        .chars()
        .take(column.saturating_sub(1))
        .map(char::len_utf8)
        .sum();
    (line_start + column_offset).min(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_first_character() {
        assert_eq!(byte_offset("msgid \"a\"\n", 1, 1), 0);
    }

    #[test]
    fn offset_counts_crlf_and_multibyte_characters() {
        let content = "msgid \"ї\"\r\nmsgstr \"є\" x\n";
        assert_eq!(byte_offset(content, 2, 1), 12);
        assert_eq!(byte_offset(content, 2, 12), 12 + "msgstr \"є\" ".len());
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(byte_offset("abc", 9, 9), 3);
    }

    #[test]
    fn diagnostic_renders_message() {
        let content = "msgid \"a\"\nmsgstr \"b\"\nnonsense\n";
        let err = locfmt::parse_catalog(content).unwrap_err();
        let diagnostic = CatalogDiagnostic::from_parse_error(Path::new("uk.po"), content, &err);
        assert_eq!(
            diagnostic.to_string(),
            "syntax error: expected a catalog entry, found 'nonsense'"
        );
        assert_eq!(diagnostic.span.offset(), 21);
        assert!(diagnostic.help.is_some());
    }
}
