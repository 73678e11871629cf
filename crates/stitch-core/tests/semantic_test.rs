//! Semantic token resolver tests: fallback lookup, variant preservation,
//! and interaction with the prefixing passes.

use stitch_core::{resolve_semantics, semantic, PrefixEngine};

/// Known tokens resolve to a var() expression with the literal fallback.
#[test]
fn resolves_through_site_shapes() {
    let src = r#"<div className="bg-semantic-surface-default text-semantic-content-primary" />"#;
    let out = resolve_semantics(src);
    assert_eq!(
        out,
        r#"<div className="bg-[var(--semantic-surface-default,#ffffff)] text-[var(--semantic-content-primary,#0f172a)]" />"#
    );
}

/// Tokens with no fallback-table entry are returned unchanged.
#[test]
fn unknown_semantic_token_is_unchanged() {
    assert_eq!(
        semantic::resolve_token("bg-semantic-foo-bar"),
        "bg-semantic-foo-bar"
    );
    let src = r#"<div className="flex bg-semantic-foo-bar" />"#;
    assert_eq!(resolve_semantics(src), src);
}

/// Variant chains survive resolution exactly.
#[test]
fn variant_chains_are_preserved() {
    let src = r#"const s = cn("hover:bg-semantic-accent-emphasis dark:text-semantic-content-inverse")"#;
    let out = resolve_semantics(src);
    assert!(out.contains("hover:bg-[var(--semantic-accent-emphasis,#1d4ed8)]"));
    assert!(out.contains("dark:text-[var(--semantic-content-inverse,#f8fafc)]"));
}

/// Every color role resolves, not just backgrounds.
#[test]
fn all_roles_resolve() {
    for (token, expected) in [
        (
            "border-semantic-border-default",
            "border-[var(--semantic-border-default,#e2e8f0)]",
        ),
        (
            "ring-semantic-border-focus",
            "ring-[var(--semantic-border-focus,#2563eb)]",
        ),
        (
            "from-semantic-accent-muted",
            "from-[var(--semantic-accent-muted,#dbeafe)]",
        ),
        (
            "caret-semantic-content-accent",
            "caret-[var(--semantic-content-accent,#2563eb)]",
        ),
    ] {
        assert_eq!(semantic::resolve_token(token), expected);
    }
}

/// Resolution happens before prefixing, so the prefixed output carries the
/// resolved form.
#[test]
fn resolution_composes_with_prefixing() {
    let engine = PrefixEngine::with_defaults();
    let src = r#"<div className="bg-semantic-surface-muted" />"#;
    let out = engine.rewrite(src, "ui-");
    assert_eq!(
        out,
        r#"<div className="ui-bg-[var(--semantic-surface-muted,#f8fafc)]" />"#
    );
}

/// The resolver runs even when no prefix was chosen.
#[test]
fn resolver_is_independent_of_prefix() {
    let engine = PrefixEngine::with_defaults();
    let src = r#"<div className="bg-semantic-status-danger" />"#;
    let with_prefix = engine.rewrite(src, "tw-");
    let without_prefix = engine.rewrite(src, "");
    assert!(with_prefix.contains("tw-bg-[var(--semantic-status-danger,#dc2626)]"));
    assert!(without_prefix.contains("bg-[var(--semantic-status-danger,#dc2626)]"));
    assert!(!without_prefix.contains("tw-"));
}
