//! Utility-class string classification.
//!
//! Decides whether a string literal found in template source is a set of
//! utility classes or an unrelated string (a prop value, a component name,
//! an import path, a package name). The decision is an ordered rule set
//! rather than one monolithic regular expression: each rule either settles
//! the verdict or passes the candidate to the next rule, so vocabulary can
//! grow without re-deriving one giant pattern.

mod tables;

use once_cell::sync::Lazy;
use regex::Regex;

pub use tables::has_variant_marker;

/// One step of the classification pipeline.
///
/// `verdict` returns `Some(true)` to accept, `Some(false)` to reject, and
/// `None` to defer to the next rule. Rules are evaluated in registration
/// order and the first decisive verdict wins.
pub trait ClassRule: Send + Sync {
    /// Stable identifier, used in trace output.
    fn id(&self) -> &'static str;

    fn verdict(&self, candidate: &str) -> Option<bool>;
}

/// Ordered-rule classifier for utility-class strings.
pub struct Classifier {
    rules: Vec<Box<dyn ClassRule>>,
}

impl Classifier {
    /// Build the default rule stack.
    pub fn new() -> Self {
        Self::with_rules(vec![
            Box::new(EmptyRule),
            Box::new(NonStyleValueRule),
            Box::new(PascalCaseRule),
            Box::new(PathLikeRule),
            Box::new(UtilityShapeRule),
            Box::new(PackageNameRule),
            Box::new(WordHeuristicsRule),
        ])
    }

    /// Build a classifier from a custom rule stack.
    /// Candidates that no rule decides are rejected.
    pub fn with_rules(rules: Vec<Box<dyn ClassRule>>) -> Self {
        Self { rules }
    }

    /// Classify one candidate string: true means "a set of utility classes".
    /// Pure and total; empty input is rejected by the first rule.
    pub fn classify(&self, candidate: &str) -> bool {
        for rule in &self.rules {
            if let Some(verdict) = rule.verdict(candidate) {
                return verdict;
            }
        }
        false
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

// ---- Rules, in evaluation order ----

/// Empty or whitespace-only strings are never class lists.
struct EmptyRule;

impl ClassRule for EmptyRule {
    fn id(&self) -> &'static str {
        "empty"
    }

    fn verdict(&self, candidate: &str) -> Option<bool> {
        if candidate.trim().is_empty() {
            Some(false)
        } else {
            None
        }
    }
}

/// Common non-style prop values (size keywords, boolean-like words,
/// alignment keywords), matched case-insensitively.
struct NonStyleValueRule;

impl ClassRule for NonStyleValueRule {
    fn id(&self) -> &'static str {
        "non-style-value"
    }

    fn verdict(&self, candidate: &str) -> Option<bool> {
        if tables::is_non_style_value(candidate) {
            Some(false)
        } else {
            None
        }
    }
}

/// A PascalCase letters-only identifier is a component or display name.
struct PascalCaseRule;

impl ClassRule for PascalCaseRule {
    fn id(&self) -> &'static str {
        "pascal-case"
    }

    fn verdict(&self, candidate: &str) -> Option<bool> {
        let mut chars = candidate.chars();
        let leading_upper = chars.next().is_some_and(|c| c.is_ascii_uppercase());
        if leading_upper && candidate.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(false)
        } else {
            None
        }
    }
}

/// Import paths and pseudo-element selectors outside the supported bracket
/// form: leading `@`, `.`, `/`, or a bare `::` at bracket depth zero.
struct PathLikeRule;

impl ClassRule for PathLikeRule {
    fn id(&self) -> &'static str {
        "path-like"
    }

    fn verdict(&self, candidate: &str) -> Option<bool> {
        if candidate.starts_with('@') || candidate.starts_with('.') || candidate.starts_with('/') {
            return Some(false);
        }
        if has_bare_double_colon(candidate) {
            return Some(false);
        }
        None
    }
}

/// Fast accept for strings shaped like a single utility class. Must run
/// before the package-name rule: `bg-red-500` is syntactically a valid
/// package name as well.
struct UtilityShapeRule;

impl ClassRule for UtilityShapeRule {
    fn id(&self) -> &'static str {
        "utility-shape"
    }

    fn verdict(&self, candidate: &str) -> Option<bool> {
        if candidate.contains(char::is_whitespace) {
            return None;
        }
        if tables::is_single_word_utility(candidate) {
            return Some(true);
        }
        if let Some((head, _)) = candidate.split_once('-') {
            if tables::is_utility_prefix(head) {
                return Some(true);
            }
        }
        None
    }
}

/// npm package names: `optional @scope/` plus a lowercase identifier.
struct PackageNameRule;

static PACKAGE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(@[a-z0-9][a-z0-9._-]*/)?[a-z0-9][a-z0-9._-]*$").unwrap()
});

impl ClassRule for PackageNameRule {
    fn id(&self) -> &'static str {
        "package-name"
    }

    fn verdict(&self, candidate: &str) -> Option<bool> {
        if PACKAGE_NAME_RE.is_match(candidate) {
            Some(false)
        } else {
            None
        }
    }
}

/// Terminal word-wise heuristics: accept when any whitespace-delimited word
/// is an allowlisted single-word utility, contains a hyphen, contains a
/// balanced `[...]` segment, or carries a variant colon. Words starting
/// with `aria-`/`data-` are plain attribute values, not style variants,
/// unless they also contain `[` or `:`.
struct WordHeuristicsRule;

impl ClassRule for WordHeuristicsRule {
    fn id(&self) -> &'static str {
        "word-heuristics"
    }

    fn verdict(&self, candidate: &str) -> Option<bool> {
        Some(candidate.split_whitespace().any(word_is_classlike))
    }
}

fn word_is_classlike(word: &str) -> bool {
    if tables::is_single_word_utility(word) {
        return true;
    }
    let attribute_value = (word.starts_with("aria-") || word.starts_with("data-"))
        && !word.contains('[')
        && !word.contains(':');
    if attribute_value {
        return false;
    }
    word.contains('-') || has_balanced_bracket(word) || word.contains(':')
}

/// True when the string contains `::` at bracket depth zero.
fn has_bare_double_colon(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    for i in 0..bytes.len() {
        match bytes[i] {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => {
                if bytes.get(i + 1) == Some(&b':') {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// True when the word contains at least one balanced `[...]` segment.
fn has_balanced_bracket(word: &str) -> bool {
    let Some(open) = word.find('[') else {
        return false;
    };
    let mut depth = 0usize;
    for &b in word.as_bytes()[open..].iter() {
        match b {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
