//! Catalog processing: back up, parse, rewrite every value, save.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::catalog::{Catalog, ParseError, Translation, parse_catalog, write_catalog};
use crate::names::{NameTables, Namespaces};
use crate::resolve::resolve_value;

/// Errors that abort processing a catalog file.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The catalog could not be copied to its backup path. Nothing was modified.
    #[error("failed to back up '{}' to '{}': {source}", from.display(), to.display())]
    Backup {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File I/O error when reading the catalog.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog is malformed.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The rewritten catalog could not be saved. The backup still holds the
    /// original contents.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    fn parse(path: &Path, error: ParseError) -> Self {
        let ParseError::Syntax {
            line,
            column,
            message,
        } = error;
        ProcessError::Parse {
            path: path.to_path_buf(),
            line,
            column,
            message,
        }
    }
}

/// Options for [`process_file`].
///
/// # Example
///
/// ```
/// use locfmt::ProcessOptions;
/// use std::path::Path;
///
/// let options = ProcessOptions::builder().input("locale/uk.po").build();
/// assert_eq!(options.backup_path(), Path::new("locale/uk_org.po"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ProcessOptions {
    /// Catalog to rewrite in place.
    #[builder(into)]
    input: PathBuf,

    /// Where the original catalog is copied first. Defaults to
    /// [`default_backup_path`] of the input.
    #[builder(into)]
    backup: Option<PathBuf>,

    /// Where the rewritten catalog is saved. Defaults to the input.
    #[builder(into)]
    output: Option<PathBuf>,

    #[builder(default)]
    namespaces: Namespaces,

    /// Report what would change without touching the filesystem.
    #[builder(default)]
    dry_run: bool,
}

impl ProcessOptions {
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// The backup path, explicit or derived from the input.
    pub fn backup_path(&self) -> PathBuf {
        self.backup
            .clone()
            .unwrap_or_else(|| default_backup_path(&self.input))
    }

    /// The path the rewritten catalog is saved to.
    pub fn output(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Derive `<stem>_org.<ext>` next to `input`, e.g. `uk.po` → `uk_org.po`.
pub fn default_backup_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push("_org");
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }
    input.with_file_name(name)
}

/// What a processing run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Entries in the catalog, header included.
    pub entries: usize,
    /// Keys in the singular name table.
    pub singular_names: usize,
    /// Keys in the plural name table.
    pub plural_names: usize,
    /// Name definition values reduced to their canonical form.
    pub definitions: usize,
    /// Values whose text changed.
    pub rewritten: usize,
    /// Non-empty values that came through unchanged.
    pub unchanged: usize,
    /// Entries with an empty or plural-form translation.
    pub skipped: usize,
    /// Where the original catalog was copied, unless this was a dry run.
    pub backup: Option<PathBuf>,
}

/// Rewrite every non-empty singular value of `catalog` in place.
///
/// Name tables are built from the catalog as it was before any rewriting.
pub fn process_catalog(catalog: &mut Catalog, namespaces: &Namespaces) -> Report {
    let tables = NameTables::from_entries(&catalog.entries, namespaces);
    let mut report = Report {
        entries: catalog.entries.len(),
        singular_names: tables.singular.len(),
        plural_names: tables.plural.len(),
        ..Report::default()
    };

    for entry in &mut catalog.entries {
        let definition = namespaces.is_name_definition(entry.context.as_deref());
        let value = match &mut entry.translation {
            Translation::Singular(value) if !value.is_empty() => value,
            Translation::Singular(_) | Translation::Plural(_) => {
                report.skipped += 1;
                continue;
            }
        };

        if definition {
            report.definitions += 1;
        }
        let resolved = resolve_value(value, &tables, definition);
        if resolved == *value {
            report.unchanged += 1;
        } else {
            debug!(
                context = entry.context.as_deref().unwrap_or_default(),
                before = %value,
                after = %resolved,
                "rewrote value"
            );
            *value = resolved;
            report.rewritten += 1;
        }
    }

    report
}

/// Copy `input` to `backup`, refusing a backup that names the input or the
/// output.
fn copy_backup(input: &Path, output: &Path, backup: &Path) -> io::Result<u64> {
    if same_file(input, backup) || same_file(output, backup) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "backup path is the catalog being rewritten",
        ));
    }
    fs::copy(input, backup)
}

/// Compare resolved paths when both exist, the paths as given otherwise.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Back up, parse, rewrite and save the catalog named by `options`.
///
/// The backup is a byte-for-byte copy taken before the catalog is read, so
/// a parse or write failure leaves it as the recovery path.
#[instrument(skip_all, fields(input = %options.input().display()))]
pub fn process_file(options: &ProcessOptions) -> Result<Report, ProcessError> {
    let input = options.input();

    let backup = if options.dry_run() {
        None
    } else {
        let backup = options.backup_path();
        copy_backup(input, options.output(), &backup).map_err(|source| ProcessError::Backup {
            from: input.to_path_buf(),
            to: backup.clone(),
            source,
        })?;
        info!(backup = %backup.display(), "backed up catalog");
        Some(backup)
    };

    let content = fs::read_to_string(input).map_err(|source| ProcessError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let mut catalog = parse_catalog(&content).map_err(|e| ProcessError::parse(input, e))?;
    info!(entries = catalog.entries.len(), "parsed catalog");

    let mut report = process_catalog(&mut catalog, options.namespaces());
    report.backup = backup;

    if options.dry_run() {
        info!(rewritten = report.rewritten, "dry run, catalog not saved");
    } else {
        let output = options.output();
        fs::write(output, write_catalog(&catalog)).map_err(|source| ProcessError::Write {
            path: output.to_path_buf(),
            source,
        })?;
        info!(rewritten = report.rewritten, output = %output.display(), "saved catalog");
    }

    Ok(report)
}
