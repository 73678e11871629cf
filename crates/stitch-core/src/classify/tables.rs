//! Static vocabulary tables for the classifier.
//!
//! All tables are process-wide read-only constants, safe for unsynchronized
//! concurrent reads from any number of rewrite invocations.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Prop values that are never utility classes.
/// Matched case-insensitively against the whole candidate string.
const NON_STYLE_VALUES: &[&str] = &[
    // Size keywords
    "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "icon",
    // Boolean-like words
    "true", "false", "yes", "no", "on", "off",
    // Alignment and orientation keywords
    "left", "right", "center", "top", "bottom", "start", "end",
    "horizontal", "vertical", "ltr", "rtl",
    // Common variant prop values
    "default", "primary", "secondary", "outline", "ghost", "link",
    "destructive",
];

/// First hyphen-delimited segments that identify a utility class.
/// A hyphenated, space-free string whose head is listed here is accepted
/// before the package-name rule gets a chance to reject it.
const UTILITY_PREFIXES: &[&str] = &[
    // Spacing
    "p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl",
    "m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml",
    "space", "gap", "inset",
    // Sizing
    "w", "h", "min", "max", "size", "basis",
    // Color roles
    "bg", "text", "border", "ring", "outline", "fill", "stroke",
    "divide", "placeholder", "caret", "accent", "decoration",
    "from", "via", "to", "shadow",
    // Typography
    "font", "tracking", "leading", "indent", "align", "whitespace",
    "break", "list", "line",
    // Layout
    "flex", "grid", "col", "row", "order", "justify", "items", "self",
    "content", "place", "object", "overflow", "overscroll", "z",
    "float", "clear", "box", "aspect", "columns",
    "top", "right", "bottom", "left",
    // Effects, transforms, interaction
    "rounded", "opacity", "mix", "blur", "brightness", "contrast",
    "drop", "backdrop", "transition", "duration", "ease", "delay",
    "animate", "scale", "rotate", "translate", "skew", "origin",
    "cursor", "select", "pointer", "resize", "scroll", "snap",
    "touch", "will",
];

/// Utilities that are a single bare word with no hyphen.
const SINGLE_WORD_UTILITIES: &[&str] = &[
    "flex", "grid", "block", "inline", "hidden", "contents", "table",
    "isolate", "static", "fixed", "absolute", "relative", "sticky",
    "visible", "invisible", "collapse", "container", "grow", "shrink",
    "italic", "underline", "overline", "uppercase", "lowercase",
    "capitalize", "truncate", "antialiased", "rounded", "border",
    "ring", "shadow", "transition", "resize", "grayscale", "invert",
    "sepia",
];

/// Variant markers that identify a string as style-related regardless of
/// which object key it sits under (state/breakpoint prefixes plus group and
/// peer selectors).
const VARIANT_MARKER_PREFIXES: &[&str] = &[
    "hover:", "focus:", "focus-visible:", "focus-within:", "active:",
    "disabled:", "visited:", "checked:", "open:", "dark:",
    "sm:", "md:", "lg:", "xl:", "2xl:",
    "group-", "peer-",
];

static NON_STYLE_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| NON_STYLE_VALUES.iter().copied().collect());

static UTILITY_PREFIX_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| UTILITY_PREFIXES.iter().copied().collect());

static SINGLE_WORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| SINGLE_WORD_UTILITIES.iter().copied().collect());

pub(crate) fn is_non_style_value(candidate: &str) -> bool {
    NON_STYLE_SET.contains(candidate.to_ascii_lowercase().as_str())
}

pub(crate) fn is_utility_prefix(segment: &str) -> bool {
    UTILITY_PREFIX_SET.contains(segment)
}

pub(crate) fn is_single_word_utility(word: &str) -> bool {
    SINGLE_WORD_SET.contains(word)
}

/// True when `value` carries an unambiguous style-variant marker: a known
/// state or breakpoint prefix on any word, a `group-`/`peer-` selector, or
/// an arbitrary-selector bracket.
pub fn has_variant_marker(value: &str) -> bool {
    if value.contains("[&") {
        return true;
    }
    value.split_whitespace().any(|word| {
        VARIANT_MARKER_PREFIXES
            .iter()
            .any(|marker| word.starts_with(marker))
    })
}
