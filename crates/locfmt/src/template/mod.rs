//! Placeholder tokens embedded in translated values.
//!
//! Two token families are recognised:
//! - Name tokens: `{name.KEY}`, `{Name.KEY}`, `{NAME.KEY}` and the
//!   `_multiple` / `_MULTIPLE` plural forms, optionally preceded by one of
//!   `? : # * %`.
//! - Plurality tokens: `{N:opt1|opt2|...}`.
//!
//! Anything else, including malformed tokens, is literal text.

pub mod ast;
mod scan;

pub use ast::{Case, NameToken, Number, PREFIX_CHARS, PluralityToken, Segment};
pub use scan::{scan_names, scan_plurality};
