//! Table formatting utilities for CLI output.

use std::path::PathBuf;

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use locfmt::{LintWarning, Report};

/// Lint results for a single catalog.
pub struct CatalogWarnings {
    pub path: PathBuf,
    pub warnings: Vec<LintWarning>,
}

impl CatalogWarnings {
    fn unknown_names(&self) -> usize {
        self.warnings
            .iter()
            .filter(|warning| matches!(warning, LintWarning::UnknownName { .. }))
            .count()
    }

    fn plurality_out_of_range(&self) -> usize {
        self.warnings
            .iter()
            .filter(|warning| matches!(warning, LintWarning::PluralityOutOfRange { .. }))
            .count()
    }
}

/// Format a processing report as a two-column table.
pub fn format_report_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Values", "Count"]);

    let rows = [
        ("Entries", report.entries),
        ("Singular names", report.singular_names),
        ("Plural names", report.plural_names),
        ("Definitions", report.definitions),
        ("Rewritten", report.rewritten),
        ("Unchanged", report.unchanged),
        ("Skipped", report.skipped),
    ];
    for (label, count) in rows {
        table.add_row(vec![label.to_string(), count.to_string()]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}

/// Format per-catalog warning counts as a table.
pub fn format_check_table(results: &[CatalogWarnings]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Catalog", "Unknown names", "Plurality out of range"]);

    for result in results {
        table.add_row(vec![
            result.path.display().to_string(),
            result.unknown_names().to_string(),
            result.plurality_out_of_range().to_string(),
        ]);
    }

    table
}
