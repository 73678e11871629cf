//! Classifier rule-vector tests: every rejection and acceptance class the
//! rewrite pipeline depends on.

use stitch_core::Classifier;

/// Lowercase prop values and identifiers are not class strings.
#[test]
fn rejects_common_non_style_strings() {
    let classifier = Classifier::new();
    for candidate in ["button", "Button", "clsx", "@radix-ui/react-slot", "true"] {
        assert!(
            !classifier.classify(candidate),
            "{candidate:?} must not classify as a class string"
        );
    }
}

/// Utility-class shapes are accepted, including arbitrary values and
/// variant chains.
#[test]
fn accepts_utility_class_strings() {
    let classifier = Classifier::new();
    for candidate in ["bg-[#343E55]", "hover:bg-red-500", "flex", "gap-2"] {
        assert!(
            classifier.classify(candidate),
            "{candidate:?} must classify as a class string"
        );
    }
}

/// Empty and whitespace-only input is rejected, never panics.
#[test]
fn total_on_degenerate_input() {
    let classifier = Classifier::new();
    assert!(!classifier.classify(""));
    assert!(!classifier.classify(" \t\n"));
}

/// The denylist is matched case-insensitively against the whole string.
#[test]
fn denylist_is_case_insensitive() {
    let classifier = Classifier::new();
    assert!(!classifier.classify("TRUE"));
    assert!(!classifier.classify("Default"));
    assert!(!classifier.classify("SM"));
}

/// Hyphenated strings with a utility head are accepted even though they are
/// also syntactically valid package names.
#[test]
fn utility_head_wins_over_package_shape() {
    let classifier = Classifier::new();
    assert!(classifier.classify("bg-red-500"));
    assert!(classifier.classify("ring-offset-2"));
    assert!(!classifier.classify("react-dom"));
    assert!(!classifier.classify("lucide-react"));
}

/// Import paths and bare pseudo-element selectors are rejected.
#[test]
fn rejects_paths_and_pseudo_elements() {
    let classifier = Classifier::new();
    assert!(!classifier.classify("./button"));
    assert!(!classifier.classify("/icons/chevron.svg"));
    assert!(!classifier.classify("@scope/pkg"));
    assert!(!classifier.classify("input::placeholder"));
}

/// A `::` inside an arbitrary-selector bracket does not trigger the
/// pseudo-element rejection.
#[test]
fn double_colon_inside_selector_bracket_is_fine() {
    let classifier = Classifier::new();
    assert!(classifier.classify("[&::placeholder]:text-slate-400"));
}

/// Multi-word strings are accepted when any word looks like a utility.
#[test]
fn multi_word_strings_accept_on_any_classlike_word() {
    let classifier = Classifier::new();
    assert!(classifier.classify("flex items-center"));
    assert!(classifier.classify("relative grid"));
    assert!(!classifier.classify("hello world"));
    assert!(!classifier.classify("some words here"));
}

/// `aria-`/`data-` words are plain attribute values unless they carry a
/// bracket or colon.
#[test]
fn attribute_value_words_do_not_count_as_utilities() {
    let classifier = Classifier::new();
    assert!(!classifier.classify("aria-expanded"));
    assert!(!classifier.classify("data-side data-align"));
    assert!(classifier.classify("data-[side=left]:slide-in"));
    assert!(classifier.classify("aria-disabled:opacity-50"));
}
