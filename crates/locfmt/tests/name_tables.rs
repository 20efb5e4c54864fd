//! Tests for building name tables from catalog entries.

use locfmt::template::Number;
use locfmt::{Entry, NameTable, NameTables, Namespaces, Translation};

fn entry(context: &str, value: &str) -> Entry {
    Entry::new("", value).with_context(context)
}

// =========================================================================
// Namespace matching
// =========================================================================

#[test]
fn singular_and_plural_namespaces_fill_separate_tables() {
    let entries = vec![
        entry("STRINGS.NAMES.hero", "Aria|Ari"),
        entry("STRINGS.NAMES_PLURAL.wolf", "Wolves"),
        entry("STRINGS.UI.title", "Title"),
    ];
    let tables = NameTables::from_entries(&entries, &Namespaces::default());

    assert_eq!(tables.singular.get("hero"), Some("Aria|Ari"));
    assert_eq!(tables.plural.get("wolf"), Some("Wolves"));
    assert_eq!(tables.singular.len(), 1);
    assert_eq!(tables.plural.len(), 1);
    assert!(!tables.singular.contains_key("title"));
}

#[test]
fn key_is_last_dotted_segment() {
    let entries = vec![entry("STRINGS.NAMES.CREATURES.FOREST.wolf", "Wolf")];
    let tables = NameTables::from_entries(&entries, &Namespaces::default());
    assert_eq!(tables.singular.get("wolf"), Some("Wolf"));
}

#[test]
fn prefix_match_is_case_sensitive() {
    let entries = vec![
        entry("strings.names.hero", "Aria"),
        entry("STRINGS.Names.hero", "Aria"),
    ];
    let tables = NameTables::from_entries(&entries, &Namespaces::default());
    assert!(tables.singular.is_empty());
    assert!(tables.plural.is_empty());
}

#[test]
fn entries_without_context_or_singular_value_are_ignored() {
    let mut plural = entry("STRINGS.NAMES.wolf", "");
    plural.translation = Translation::Plural(vec!["Wolf".into(), "Wolves".into()]);
    let entries = vec![Entry::new("hero", "Aria"), plural];

    let tables = NameTables::from_entries(&entries, &Namespaces::default());
    assert_eq!(tables, NameTables::default());
}

#[test]
fn empty_value_defines_empty_name() {
    let entries = vec![entry("STRINGS.NAMES.ghost", "")];
    let tables = NameTables::from_entries(&entries, &Namespaces::default());
    assert_eq!(tables.singular.get("ghost"), Some(""));
}

#[test]
fn custom_namespaces() {
    let namespaces = Namespaces::builder()
        .singular("NAMES.")
        .plural("PLURALS.")
        .build();
    let entries = vec![
        entry("NAMES.hero", "Aria"),
        entry("PLURALS.hero", "Arias"),
        entry("STRINGS.NAMES.hero", "ignored"),
    ];
    let tables = NameTables::from_entries(&entries, &namespaces);
    assert_eq!(tables.singular.get("hero"), Some("Aria"));
    assert_eq!(tables.plural.get("hero"), Some("Arias"));
}

#[test]
fn classify_reports_number_and_key() {
    let namespaces = Namespaces::default();
    assert_eq!(
        namespaces.classify("STRINGS.NAMES.hero"),
        Some((Number::Singular, "hero"))
    );
    assert_eq!(
        namespaces.classify("STRINGS.NAMES_PLURAL.hero"),
        Some((Number::Plural, "hero"))
    );
    assert!(namespaces.is_name_definition(Some("STRINGS.NAMES.hero")));
    assert!(!namespaces.is_name_definition(Some("STRINGS.NAMES_PLURAL.hero")));
    assert!(!namespaces.is_name_definition(None));
}

// =========================================================================
// Ordering and duplicates
// =========================================================================

#[test]
fn last_definition_wins() {
    let entries = vec![
        entry("STRINGS.NAMES.hero", "Aria"),
        entry("STRINGS.NAMES.OTHER.hero", "Bran"),
    ];
    let tables = NameTables::from_entries(&entries, &Namespaces::default());
    assert_eq!(tables.singular.get("hero"), Some("Bran"));
    assert_eq!(tables.singular.len(), 1);
}

#[test]
fn iteration_follows_first_insertion_order() {
    let mut table = NameTable::new();
    table.insert("b", "B");
    table.insert("a", "A");
    assert_eq!(table.insert("b", "B2"), Some("B".to_string()));
    table.insert("c", "C");

    let pairs: Vec<(&str, &str)> = table.iter().collect();
    assert_eq!(pairs, vec![("b", "B2"), ("a", "A"), ("c", "C")]);
}

#[test]
fn resolve_falls_back_to_key() {
    let table: NameTable = [("hero", "Aria")].into_iter().collect();
    assert_eq!(table.resolve("hero"), "Aria");
    assert_eq!(table.resolve("villain"), "villain");
}
