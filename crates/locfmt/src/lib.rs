//! Post-processor for gettext translation catalogs.
//!
//! Resolves plurality placeholders (`{2:item|items}`) and name tokens
//! (`{Name.hero}`, `{NAME_MULTIPLE.wolf}`, `#{name.hero}`) embedded in
//! translated values, using name definitions stored in the same catalog
//! under reserved `STRINGS.NAMES.` / `STRINGS.NAMES_PLURAL.` contexts.
//!
//! # Example
//!
//! ```
//! use locfmt::{NameTable, NameTables, resolve_value};
//!
//! let singular: NameTable = [("hero", "Aria|Ari")].into_iter().collect();
//! let tables = NameTables::new(singular, NameTable::new());
//!
//! let text = resolve_value("Welcome, {Name.hero}! You have {2:item|items}.", &tables, false);
//! assert_eq!(text, "Welcome, Aria! You have items.");
//! ```

pub mod catalog;
pub mod names;
pub mod process;
pub mod resolve;
pub mod template;

pub use catalog::{Catalog, Entry, ParseError, Translation, parse_catalog, write_catalog};
pub use names::{NameTable, NameTables, Namespaces};
pub use process::{
    ProcessError, ProcessOptions, Report, default_backup_path, process_catalog, process_file,
};
pub use resolve::{
    LintWarning, canonical_form, compute_suggestions, lint_catalog, replace_names,
    replace_plurality, resolve_value,
};
