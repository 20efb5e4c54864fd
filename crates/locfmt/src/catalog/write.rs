//! Catalog writer.

use super::{Catalog, Entry, Translation};

/// Serialize a catalog back to `.po` text.
///
/// Entries are separated by a blank line. Values with an interior newline
/// are written in the multi-line form gettext tools produce; no wrapping
/// is applied otherwise.
pub fn write_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (index, entry) in catalog.entries.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_entry(&mut out, entry);
    }
    if !catalog.trailing_comments.is_empty() {
        if !catalog.entries.is_empty() {
            out.push('\n');
        }
        for line in &catalog.trailing_comments {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn write_entry(out: &mut String, entry: &Entry) {
    for line in &entry.comments {
        out.push_str(line);
        out.push('\n');
    }
    if let Some(context) = &entry.context {
        write_field(out, "msgctxt", context);
    }
    write_field(out, "msgid", &entry.id);
    if let Some(id_plural) = &entry.id_plural {
        write_field(out, "msgid_plural", id_plural);
    }
    match &entry.translation {
        Translation::Singular(value) => write_field(out, "msgstr", value),
        Translation::Plural(values) => {
            for (index, value) in values.iter().enumerate() {
                write_field(out, &format!("msgstr[{index}]"), value);
            }
        }
    }
}

fn write_field(out: &mut String, keyword: &str, value: &str) {
    out.push_str(keyword);
    if is_multiline(value) {
        out.push_str(" \"\"\n");
        for piece in value.split_inclusive('\n') {
            out.push('"');
            escape_into(out, piece);
            out.push_str("\"\n");
        }
    } else {
        out.push_str(" \"");
        escape_into(out, value);
        out.push_str("\"\n");
    }
}

/// True when a newline appears before the last character.
fn is_multiline(value: &str) -> bool {
    value
        .trim_end_matches('\n')
        .contains('\n')
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{0b}' => out.push_str("\\v"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_stays_single_line() {
        assert!(!is_multiline("Hello\n"));
        assert!(!is_multiline("Hello"));
        assert!(is_multiline("a\nb"));
        assert!(is_multiline("a\nb\n"));
    }

    #[test]
    fn escape_round_trips_control_characters() {
        let mut out = String::new();
        escape_into(&mut out, "a\"b\\c\td\n");
        assert_eq!(out, r#"a\"b\\c\td\n"#);
    }
}
