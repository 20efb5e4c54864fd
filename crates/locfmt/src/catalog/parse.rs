//! Catalog parser using winnow.
//!
//! Handles:
//! - `#` comment lines (kept verbatim and attached to the next entry)
//! - `msgctxt`, `msgid`, `msgid_plural`, `msgstr` and `msgstr[n]` fields
//! - Multi-line values built from quoted continuation lines
//! - C-style escapes inside quoted strings

use winnow::ascii::{digit1, line_ending, space0, till_line_ending};
use winnow::combinator::{alt, delimited, eof, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{any, take_till, take_while};

use super::error::ParseError;
use super::{Catalog, Entry, Translation};

/// Parse the contents of a `.po` file into a catalog.
pub fn parse_catalog(input: &str) -> Result<Catalog, ParseError> {
    let mut remaining = input.strip_prefix('\u{feff}').unwrap_or(input);
    match catalog(&mut remaining) {
        Ok(catalog) => {
            if remaining.is_empty() {
                Ok(catalog)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "expected a catalog entry, found '{}'",
                        remaining.lines().next().unwrap_or_default()
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {}", e),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse a whole catalog: entries, then any trailing comment block.
fn catalog(input: &mut &str) -> ModalResult<Catalog> {
    blank(input)?;
    let entries: Vec<Entry> = repeat(0.., terminated(entry, blank)).parse_next(input)?;
    let trailing_comments: Vec<String> =
        repeat(0.., terminated(comment_line, blank)).parse_next(input)?;
    Ok(Catalog {
        entries,
        trailing_comments,
    })
}

/// Parse one entry: comments, optional context, id, optional plural id, translation.
fn entry(input: &mut &str) -> ModalResult<Entry> {
    let comments: Vec<String> = repeat(0.., terminated(comment_line, blank)).parse_next(input)?;
    let context = opt(terminated(preceded("msgctxt", field_value), blank)).parse_next(input)?;
    let id = terminated(preceded("msgid", field_value), blank).parse_next(input)?;
    let id_plural =
        opt(terminated(preceded("msgid_plural", field_value), blank)).parse_next(input)?;
    let translation = alt((
        plural_values.map(Translation::Plural),
        preceded("msgstr", field_value).map(Translation::Singular),
    ))
    .parse_next(input)?;

    Ok(Entry {
        comments,
        context,
        id,
        id_plural,
        translation,
    })
}

/// Parse one or more `msgstr[n]` fields.
fn plural_values(input: &mut &str) -> ModalResult<Vec<String>> {
    repeat(
        1..,
        terminated(preceded(("msgstr[", digit1, ']'), field_value), blank),
    )
    .parse_next(input)
}

/// Parse a comment line, keeping the leading `#`.
fn comment_line(input: &mut &str) -> ModalResult<String> {
    terminated(('#', till_line_ending).take(), eol)
        .map(str::to_string)
        .parse_next(input)
}

/// Parse the quoted value after a keyword, joining continuation lines.
fn field_value(input: &mut &str) -> ModalResult<String> {
    let first = quoted_line(input)?;
    let rest: Vec<String> = repeat(0.., quoted_line).parse_next(input)?;
    if rest.is_empty() {
        Ok(first)
    } else {
        Ok(first + &rest.concat())
    }
}

/// Parse a quoted string followed by the end of its line.
fn quoted_line(input: &mut &str) -> ModalResult<String> {
    delimited(space0, quoted, (space0, eol)).parse_next(input)
}

/// A piece of a quoted string.
enum Fragment<'i> {
    /// Text without escapes.
    Text(&'i str),
    /// A recognised escape, already decoded.
    Escaped(char),
    /// An escape we don't decode; the backslash is kept.
    Unknown(char),
}

/// Parse a double-quoted string, decoding escapes.
fn quoted(input: &mut &str) -> ModalResult<String> {
    delimited(
        '"',
        repeat(0.., fragment).fold(String::new, |mut acc, fragment| {
            match fragment {
                Fragment::Text(text) => acc.push_str(text),
                Fragment::Escaped(c) => acc.push(c),
                Fragment::Unknown(c) => {
                    acc.push('\\');
                    acc.push(c);
                }
            }
            acc
        }),
        '"',
    )
    .parse_next(input)
}

fn fragment<'i>(input: &mut &'i str) -> ModalResult<Fragment<'i>> {
    alt((
        take_till(1.., ['"', '\\', '\n', '\r']).map(Fragment::Text),
        preceded('\\', any).map(|c: char| match unescape(c) {
            Some(decoded) => Fragment::Escaped(decoded),
            None => Fragment::Unknown(c),
        }),
    ))
    .parse_next(input)
}

/// Decode the character after a backslash.
fn unescape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0c}'),
        'v' => Some('\u{0b}'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Skip whitespace, including blank lines.
fn blank(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

/// End of line or end of input.
fn eol(input: &mut &str) -> ModalResult<()> {
    alt((line_ending, eof)).void().parse_next(input)
}
