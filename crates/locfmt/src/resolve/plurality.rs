//! Plurality token resolution.

use crate::template::{Segment, scan_plurality};

/// Replace every `{N:opt1|opt2|...}` token with option `N`.
///
/// Out-of-range indices (including `0`) select the last option. Replacement
/// text is not re-scanned.
///
/// # Examples
///
/// ```
/// use locfmt::replace_plurality;
///
/// assert_eq!(replace_plurality("{1:cat|cats}"), "cat");
/// assert_eq!(replace_plurality("{3:cat|cats}"), "cats");
/// ```
pub fn replace_plurality(text: &str) -> String {
    if !text.contains('{') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for segment in scan_plurality(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Token(token) => out.push_str(token.select()),
        }
    }
    out
}
