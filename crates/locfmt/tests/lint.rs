//! Tests for fallback detection in catalog values.

use locfmt::{
    Catalog, Entry, LintWarning, NameTables, Namespaces, compute_suggestions, lint_catalog,
};

fn lint(entries: Vec<Entry>) -> Vec<LintWarning> {
    let catalog = Catalog::new(entries);
    let namespaces = Namespaces::default();
    let tables = NameTables::from_entries(&catalog.entries, &namespaces);
    lint_catalog(&catalog, &tables, &namespaces)
}

fn names() -> Vec<Entry> {
    vec![
        Entry::new("Aria", "Aria|Ari").with_context("STRINGS.NAMES.hero"),
        Entry::new("Hera", "Hera").with_context("STRINGS.NAMES.hera"),
        Entry::new("Wolves", "Wolves").with_context("STRINGS.NAMES_PLURAL.wolf"),
    ]
}

fn with_names(entry: Entry) -> Vec<Entry> {
    let mut entries = names();
    entries.push(entry);
    entries
}

// =========================================================================
// Unknown names
// =========================================================================

#[test]
fn clean_catalog_has_no_warnings() {
    let warnings = lint(with_names(
        Entry::new("hi", "{Name.hero} meets {name_multiple.wolf}: {2:a|b}")
            .with_context("STRINGS.UI.hi"),
    ));
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn unknown_name_suggests_close_keys() {
    let warnings = lint(with_names(
        Entry::new("hi", "Hello {Name.heor}").with_context("STRINGS.UI.hi"),
    ));
    assert_eq!(
        warnings,
        vec![LintWarning::UnknownName {
            context: Some("STRINGS.UI.hi".to_string()),
            token: "{Name.heor}".to_string(),
            key: "heor".to_string(),
            suggestions: vec!["hero".to_string(), "hera".to_string()],
        }]
    );
}

#[test]
fn unknown_name_checks_the_table_of_its_number() {
    let warnings = lint(with_names(
        Entry::new("hi", "{NAME_MULTIPLE.hero} and #{name.wolf}").with_context("STRINGS.UI.hi"),
    ));
    let tokens: Vec<&str> = warnings
        .iter()
        .map(|warning| match warning {
            LintWarning::UnknownName { token, .. } => token.as_str(),
            LintWarning::PluralityOutOfRange { token, .. } => token.as_str(),
        })
        .collect();
    assert_eq!(tokens, vec!["{NAME_MULTIPLE.hero}", "#{name.wolf}"]);
}

#[test]
fn name_definitions_and_empty_values_are_not_checked() {
    let warnings = lint(vec![
        Entry::new("x", "{Name.missing}|x").with_context("STRINGS.NAMES.x"),
        Entry::new("y", "").with_context("STRINGS.UI.y"),
    ]);
    assert!(warnings.is_empty(), "{warnings:?}");
}

// =========================================================================
// Plurality
// =========================================================================

#[test]
fn plurality_index_out_of_range() {
    let warnings = lint(vec![Entry::new("n", "{0:one|many} {3:one|many} {2:one|many}")]);
    assert_eq!(
        warnings,
        vec![
            LintWarning::PluralityOutOfRange {
                context: None,
                token: "{0:one|many}".to_string(),
                index: 0,
                options: 2,
            },
            LintWarning::PluralityOutOfRange {
                context: None,
                token: "{3:one|many}".to_string(),
                index: 3,
                options: 2,
            },
        ]
    );
}

#[test]
fn plurality_is_checked_after_name_substitution() {
    let mut entries = names();
    entries.push(Entry::new("coin", "{4:coin|coins}").with_context("STRINGS.NAMES.coin"));
    entries.push(Entry::new("pay", "Pay #{Name.coin}").with_context("STRINGS.UI.pay"));

    let warnings = lint(entries);
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(matches!(
        &warnings[0],
        LintWarning::PluralityOutOfRange { index: 4, options: 2, .. }
    ));
}

// =========================================================================
// Rendering
// =========================================================================

#[test]
fn warnings_display_context_and_token() {
    let unknown = LintWarning::UnknownName {
        context: Some("STRINGS.UI.hi".to_string()),
        token: "{Name.heor}".to_string(),
        key: "heor".to_string(),
        suggestions: vec!["hero".to_string()],
    };
    assert_eq!(
        unknown.to_string(),
        "'STRINGS.UI.hi': unknown name 'heor' in {Name.heor}, did you mean: hero?"
    );

    let plurality = LintWarning::PluralityOutOfRange {
        context: None,
        token: "{3:a|b}".to_string(),
        index: 3,
        options: 2,
    };
    assert_eq!(
        plurality.to_string(),
        "<no context>: index 3 in {3:a|b} has no option (1..=2), the last option is used"
    );
}

#[test]
fn warnings_serialize_with_kind_tag() {
    let warning = LintWarning::UnknownName {
        context: None,
        token: "{name.x}".to_string(),
        key: "x".to_string(),
        suggestions: Vec::new(),
    };
    insta::assert_json_snapshot!(warning, @r#"
    {
      "kind": "unknown_name",
      "context": null,
      "token": "{name.x}",
      "key": "x",
      "suggestions": []
    }
    "#);
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn suggestions_respect_distance_limits() {
    let keys = ["hero", "heroes", "her", "villain"];
    assert_eq!(compute_suggestions("hera", keys.into_iter()), vec!["hero", "her"]);
    assert_eq!(compute_suggestions("hro", keys.into_iter()), vec!["hero"]);
    assert!(compute_suggestions("hero", ["hero"].into_iter()).is_empty());
    assert!(compute_suggestions("zzz", keys.into_iter()).is_empty());
}

#[test]
fn at_most_three_suggestions() {
    let keys = ["aaa1", "aaa2", "aaa3", "aaa4"];
    assert_eq!(compute_suggestions("aaa", keys.into_iter()).len(), 3);
}
