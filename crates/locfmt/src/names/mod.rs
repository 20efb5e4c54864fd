//! Name tables built from catalog entries in reserved context namespaces.

mod namespaces;
mod table;

pub use namespaces::{Namespaces, PLURAL_PREFIX, SINGULAR_PREFIX};
pub use table::{NameTable, NameTables};
