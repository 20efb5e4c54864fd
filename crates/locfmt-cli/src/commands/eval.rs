//! Implementation of the `locfmt eval` command.

use std::path::PathBuf;

use clap::Args;
use locfmt::{resolve_value, NameTables, Namespaces};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use super::load_catalog;

/// Arguments for the eval command.
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Template string to resolve
    #[arg(long, required = true)]
    pub template: String,

    /// Catalog supplying name definitions (.po)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Treat the template as the value of a singular name definition
    #[arg(long)]
    pub definition: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs, namespaces: &Namespaces) -> Result<i32> {
    let tables = match &args.catalog {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => NameTables::from_entries(&catalog.entries, namespaces),
            Err(code) => return Ok(code),
        },
        None => NameTables::default(),
    };

    let result = resolve_value(&args.template, &tables, args.definition);
    if args.json {
        let output = EvalResult { result };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
