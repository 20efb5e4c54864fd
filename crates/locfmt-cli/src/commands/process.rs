//! Implementation of the `locfmt process` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use locfmt::{process_file, Namespaces, ProcessError, ProcessOptions};
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};

use crate::output::table::format_report_table;
use crate::output::{print_error, CatalogDiagnostic};

/// Arguments for the process command.
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Catalog to rewrite in place (.po)
    pub catalog: PathBuf,

    /// Where to copy the original catalog. Defaults to <stem>_org.<ext>
    #[arg(long)]
    pub backup: Option<PathBuf>,

    /// Save the rewritten catalog here instead of in place
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the process command.
pub fn run_process(args: ProcessArgs, namespaces: &Namespaces) -> Result<i32> {
    let options = ProcessOptions::builder()
        .input(args.catalog)
        .maybe_backup(args.backup)
        .maybe_output(args.output)
        .namespaces(namespaces.clone())
        .dry_run(args.dry_run)
        .build();

    let report = match process_file(&options) {
        Ok(report) => report,
        Err(ProcessError::Parse {
            path,
            line,
            column,
            message,
        }) => {
            let content = read_to_string(&path).into_diagnostic()?;
            let diagnostic = CatalogDiagnostic::at(&path, &content, line, column, message);
            eprintln!("{:?}", miette::Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
        Err(e) => {
            print_error(e);
            return Ok(exitcode::IOERR);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    println!("{}", format_report_table(&report));
    match &report.backup {
        Some(backup) => println!(
            "{} {} (original saved to {})",
            "Wrote".if_supports_color(Stream::Stdout, |text| text.green()),
            options.output().display(),
            backup.display()
        ),
        None => println!(
            "{} {} not modified",
            "Dry run:".if_supports_color(Stream::Stdout, |text| text.cyan()),
            options.input().display()
        ),
    }

    Ok(exitcode::OK)
}
