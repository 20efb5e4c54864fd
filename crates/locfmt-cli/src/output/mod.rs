//! Terminal output: diagnostics, tables and status lines.

pub mod diagnostic;
pub mod table;

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

pub use diagnostic::CatalogDiagnostic;

/// Print an `error:` line to stderr.
pub fn print_error(message: impl Display) {
    eprintln!(
        "{} {}",
        "error:".if_supports_color(Stream::Stderr, |text| text.red()),
        message
    );
}

/// Print a `warning:` line to stdout.
pub fn print_warning(message: impl Display) {
    println!(
        "{} {}",
        "warning:".if_supports_color(Stream::Stdout, |text| text.yellow()),
        message
    );
}
