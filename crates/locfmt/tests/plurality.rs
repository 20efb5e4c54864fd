//! Tests for plurality token resolution.

use locfmt::replace_plurality;

// =============================================================================
// Option selection
// =============================================================================

#[test]
fn index_one_selects_first_option() {
    assert_eq!(replace_plurality("{1:cat|cats}"), "cat");
}

#[test]
fn index_selects_matching_option() {
    for (index, expected) in [(1, "zero"), (2, "one"), (3, "two"), (4, "three")] {
        let text = format!("{{{index}:zero|one|two|three}}");
        assert_eq!(replace_plurality(&text), expected, "index {index}");
    }
}

#[test]
fn index_past_end_clamps_to_last_option() {
    assert_eq!(replace_plurality("{3:cat|cats}"), "cats");
    assert_eq!(replace_plurality("{100:cat|cats}"), "cats");
}

#[test]
fn index_zero_selects_last_option() {
    assert_eq!(replace_plurality("{0:cat|cats}"), "cats");
}

#[test]
fn single_option_is_always_chosen() {
    assert_eq!(replace_plurality("{1:sheep}"), "sheep");
    assert_eq!(replace_plurality("{5:sheep}"), "sheep");
}

#[test]
fn empty_options_are_kept() {
    assert_eq!(replace_plurality("cat{1:|s}"), "cat");
    assert_eq!(replace_plurality("cat{2:|s}"), "cats");
    assert_eq!(replace_plurality("{2:a|}"), "");
}

// =============================================================================
// Surrounding text
// =============================================================================

#[test]
fn tokens_inside_sentence() {
    assert_eq!(
        replace_plurality("You have {2:item|items} and {1:coin|coins}."),
        "You have items and coin."
    );
}

#[test]
fn text_without_braces_is_unchanged() {
    let text = "No tokens here | at all: 1";
    assert_eq!(replace_plurality(text), text);
}

#[test]
fn non_plurality_braces_are_unchanged() {
    for text in ["{name.hero}", "{x:a|b}", "{2:}", "{2 :a|b}", "{-1:a|b}", "{2:a|b"] {
        assert_eq!(replace_plurality(text), text, "{text}");
    }
}

#[test]
fn replacement_text_is_not_rescanned() {
    assert_eq!(replace_plurality("{1:{2:x}|y}"), "{2:x|y}");
}

#[test]
fn option_body_may_span_lines() {
    assert_eq!(replace_plurality("{2:one\nline|two\nlines}"), "two\nlines");
}

#[test]
fn non_ascii_options() {
    assert_eq!(
        replace_plurality("У вас {3:предмет|предмети|предметів}"),
        "У вас предметів"
    );
}
