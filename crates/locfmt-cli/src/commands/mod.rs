//! CLI command implementations.

mod check;
mod eval;
mod process;

pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};
pub use process::{run_process, ProcessArgs};

use std::fs::read_to_string;
use std::path::Path;

use locfmt::{parse_catalog, Catalog};

use crate::output::{print_error, CatalogDiagnostic};

/// Read and parse a catalog, reporting any failure to stderr.
///
/// On failure the error carries the exit code to use: `IOERR` when the file
/// cannot be read, `DATAERR` when it is malformed.
fn load_catalog(path: &Path) -> Result<Catalog, i32> {
    let content = read_to_string(path).map_err(|e| {
        print_error(format_args!("cannot read catalog {}: {}", path.display(), e));
        exitcode::IOERR
    })?;
    parse_catalog(&content).map_err(|e| {
        let diagnostic = CatalogDiagnostic::from_parse_error(path, &content, &e);
        eprintln!("{:?}", miette::Report::new(diagnostic));
        exitcode::DATAERR
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_catalog_maps_failures_to_exit_codes() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.po");
        assert_eq!(load_catalog(&missing).unwrap_err(), exitcode::IOERR);

        let broken = dir.path().join("broken.po");
        fs::write(&broken, "msgid \"a\"\nnonsense\n").unwrap();
        assert_eq!(load_catalog(&broken).unwrap_err(), exitcode::DATAERR);

        let valid = dir.path().join("uk.po");
        fs::write(&valid, "msgid \"a\"\nmsgstr \"b\"\n").unwrap();
        assert_eq!(load_catalog(&valid).unwrap().entries.len(), 1);
    }
}
