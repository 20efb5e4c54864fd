//! Implementation of the `locfmt check` command.

use std::path::PathBuf;

use clap::Args;
use locfmt::{lint_catalog, LintWarning, NameTables, Namespaces};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tracing::debug;

use super::load_catalog;
use crate::output::print_warning;
use crate::output::table::{format_check_table, CatalogWarnings};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Catalogs to check (.po)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any warning is found
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one checked catalog.
#[derive(Debug, Serialize)]
struct CheckJson<'a> {
    file: String,
    warnings: &'a [LintWarning],
}

/// Run the check command.
pub fn run_check(args: CheckArgs, namespaces: &Namespaces) -> Result<i32> {
    let mut results = Vec::new();
    let mut failure = None;

    for path in args.files {
        let catalog = match load_catalog(&path) {
            Ok(catalog) => catalog,
            Err(code) => {
                failure = failure.or(Some(code));
                continue;
            }
        };
        let tables = NameTables::from_entries(&catalog.entries, namespaces);
        let warnings = lint_catalog(&catalog, &tables, namespaces);
        debug!(
            catalog = %path.display(),
            singular = tables.singular.len(),
            plural = tables.plural.len(),
            warnings = warnings.len(),
            "checked catalog"
        );
        results.push(CatalogWarnings { path, warnings });
    }

    if args.json {
        let json_data: Vec<CheckJson<'_>> = results
            .iter()
            .map(|result| CheckJson {
                file: result.path.display().to_string(),
                warnings: &result.warnings,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_data).into_diagnostic()?);
    } else {
        for result in &results {
            for warning in &result.warnings {
                print_warning(format_args!("{}: {}", result.path.display(), warning));
            }
        }
        if !results.is_empty() {
            println!("{}", format_check_table(&results));
        }
    }

    let any_warnings = results.iter().any(|result| !result.warnings.is_empty());
    Ok(match failure {
        Some(code) => code,
        None if args.strict && any_warnings => exitcode::DATAERR,
        None => exitcode::OK,
    })
}
