//! Name token substitution.

use crate::names::NameTables;
use crate::template::{NameToken, Segment, scan_names};

/// Replace name tokens with display names from `tables`.
///
/// - Without a prefix, a token becomes the first `|`-segment of the name,
///   case-transformed: `{NAME.hero}` with `Aria|Ari` gives `ARIA`.
/// - With a prefix, the prefix is kept and the whole name follows:
///   `#{Name.hero}` gives `#Aria|Ari`.
/// - Unknown keys resolve to the key itself.
///
/// When `definition` is set the text is a name definition's own value:
/// tokens are left alone and only its canonical form is kept.
pub fn replace_names(text: &str, tables: &NameTables, definition: bool) -> String {
    if definition {
        return canonical_form(text).to_string();
    }
    if !text.contains('{') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for segment in scan_names(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Token(token) => push_name(&mut out, &token, tables),
        }
    }
    out
}

fn push_name(out: &mut String, token: &NameToken, tables: &NameTables) {
    let name = tables.table(token.number).resolve(&token.key);
    match token.prefix {
        Some(prefix) => {
            out.push(prefix);
            out.push_str(&token.case.apply(name));
        }
        None => out.push_str(&token.case.apply(canonical_form(name))),
    }
}

/// The first `|`-delimited form of a display name.
pub fn canonical_form(name: &str) -> &str {
    name.split_once('|').map_or(name, |(first, _)| first)
}
