//! Semantic token fallback table.
//!
//! Maps each `semantic-<category>-<name>` design token to the literal color
//! used as the `var()` fallback in installed components. Process-wide
//! constant data, never mutated at runtime.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Utility roles that can carry a semantic color token.
pub(crate) const ROLE_PREFIXES: &[&str] = &[
    "bg", "text", "border", "ring", "outline", "fill", "stroke",
    "from", "via", "to", "divide", "placeholder", "caret", "accent",
    "shadow", "decoration",
];

const FALLBACKS: &[(&str, &str)] = &[
    // Surfaces
    ("semantic-surface-default", "#ffffff"),
    ("semantic-surface-muted", "#f8fafc"),
    ("semantic-surface-raised", "#ffffff"),
    ("semantic-surface-sunken", "#f1f5f9"),
    ("semantic-surface-inverse", "#0f172a"),
    // Content
    ("semantic-content-primary", "#0f172a"),
    ("semantic-content-secondary", "#475569"),
    ("semantic-content-muted", "#94a3b8"),
    ("semantic-content-inverse", "#f8fafc"),
    ("semantic-content-accent", "#2563eb"),
    // Borders
    ("semantic-border-default", "#e2e8f0"),
    ("semantic-border-strong", "#cbd5e1"),
    ("semantic-border-focus", "#2563eb"),
    // Accent
    ("semantic-accent-default", "#2563eb"),
    ("semantic-accent-emphasis", "#1d4ed8"),
    ("semantic-accent-muted", "#dbeafe"),
    ("semantic-accent-contrast", "#ffffff"),
    // Status
    ("semantic-status-danger", "#dc2626"),
    ("semantic-status-warning", "#d97706"),
    ("semantic-status-success", "#16a34a"),
    ("semantic-status-info", "#0284c7"),
];

static FALLBACK_MAP: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| FALLBACKS.iter().copied().collect());

/// Literal fallback color for a semantic token, or None when the token is
/// not part of the design vocabulary.
pub(crate) fn fallback_for(token: &str) -> Option<&'static str> {
    FALLBACK_MAP.get(token).copied()
}
