//! Resolution of name and plurality tokens in translated values.

mod lint;
mod names;
mod plurality;

pub use lint::{LintWarning, compute_suggestions, lint_catalog};
pub use names::{canonical_form, replace_names};
pub use plurality::replace_plurality;

use crate::names::NameTables;

/// Run the full value pipeline: name substitution, then plurality.
///
/// Plurality runs second so options supplied by a name definition are
/// resolved too.
pub fn resolve_value(text: &str, tables: &NameTables, definition: bool) -> String {
    replace_plurality(&replace_names(text, tables, definition))
}
