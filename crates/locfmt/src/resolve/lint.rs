//! Checks for tokens that resolve through a fallback.
//!
//! Substitution never fails: an unknown key prints the key itself and an
//! out-of-range plurality index picks the last option. These checks report
//! where that happens so translators can fix the source.

use std::fmt;

use serde::Serialize;
use strsim::levenshtein;

use crate::catalog::Catalog;
use crate::names::{NameTables, Namespaces};
use crate::resolve::replace_names;
use crate::template::{Segment, scan_names, scan_plurality};

/// A token that resolved through a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintWarning {
    /// A name token whose key is not defined in its table.
    UnknownName {
        context: Option<String>,
        token: String,
        key: String,
        suggestions: Vec<String>,
    },
    /// A plurality token whose index has no matching option.
    PluralityOutOfRange {
        context: Option<String>,
        token: String,
        index: u64,
        options: usize,
    },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintWarning::UnknownName {
                context,
                token,
                key,
                suggestions,
            } => {
                write!(
                    f,
                    "{}: unknown name '{key}' in {token}",
                    display_context(context.as_deref())
                )?;
                if !suggestions.is_empty() {
                    write!(f, ", did you mean: {}?", suggestions.join(", "))?;
                }
                Ok(())
            }
            LintWarning::PluralityOutOfRange {
                context,
                token,
                index,
                options,
            } => write!(
                f,
                "{}: index {index} in {token} has no option (1..={options}), the last option is used",
                display_context(context.as_deref())
            ),
        }
    }
}

fn display_context(context: Option<&str>) -> String {
    match context {
        Some(context) => format!("'{context}'"),
        None => "<no context>".to_string(),
    }
}

/// Check every non-definition value of a catalog.
///
/// Plurality tokens are checked after name substitution, matching what
/// processing actually produces.
pub fn lint_catalog(
    catalog: &Catalog,
    tables: &NameTables,
    namespaces: &Namespaces,
) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for entry in &catalog.entries {
        let Some(value) = entry.value() else {
            continue;
        };
        if value.is_empty() || namespaces.is_name_definition(entry.context()) {
            continue;
        }
        lint_names(value, tables, entry.context(), &mut warnings);
        lint_plurality(
            &replace_names(value, tables, false),
            entry.context(),
            &mut warnings,
        );
    }
    warnings
}

fn lint_names(
    value: &str,
    tables: &NameTables,
    context: Option<&str>,
    warnings: &mut Vec<LintWarning>,
) {
    for segment in scan_names(value) {
        let Segment::Token(token) = segment else {
            continue;
        };
        let table = tables.table(token.number);
        if table.contains_key(&token.key) {
            continue;
        }
        warnings.push(LintWarning::UnknownName {
            context: context.map(str::to_string),
            token: token.to_string(),
            suggestions: compute_suggestions(&token.key, table.keys()),
            key: token.key,
        });
    }
}

fn lint_plurality(value: &str, context: Option<&str>, warnings: &mut Vec<LintWarning>) {
    for segment in scan_plurality(value) {
        let Segment::Token(token) = segment else {
            continue;
        };
        if token.position().is_none() {
            warnings.push(LintWarning::PluralityOutOfRange {
                context: context.map(str::to_string),
                token: token.to_string(),
                index: token.index,
                options: token.options.len(),
            });
        }
    }
}

/// Suggest known keys close to `key`.
///
/// - Maximum distance 1 for keys of 3 characters or fewer, 2 otherwise
/// - Exact matches are excluded
/// - At most 3 suggestions, nearest first
pub fn compute_suggestions<'a>(key: &str, available: impl Iterator<Item = &'a str>) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .filter_map(|candidate| {
            let dist = levenshtein(key, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
