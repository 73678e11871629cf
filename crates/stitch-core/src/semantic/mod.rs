//! Semantic color token resolution.
//!
//! An independent, always-on pass that runs before prefixing: abstract
//! `<role>-semantic-<category>-<name>` tokens are rewritten to a portable
//! `<role>-[var(--semantic-<category>-<name>,<fallback>)]` form so installed
//! components render correctly even when the host project has not defined
//! the custom properties. Tokens without a table entry are left unchanged.

mod tables;

use crate::token::variant_chain_end;
use tables::{fallback_for, ROLE_PREFIXES};

/// Resolve every semantic token in one class-list string.
/// Token count and order are preserved.
pub fn resolve_class_list(list: &str) -> String {
    list.split(' ')
        .map(resolve_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve one token. Variant-chain prefixes are preserved verbatim;
/// anything that is not a known semantic token comes back unchanged.
pub fn resolve_token(token: &str) -> String {
    let chain_end = variant_chain_end(token);
    let (variants, body) = token.split_at(chain_end);

    for role in ROLE_PREFIXES {
        let Some(rest) = body.strip_prefix(role) else {
            continue;
        };
        let Some(name) = rest.strip_prefix("-semantic-") else {
            continue;
        };
        let full = format!("semantic-{name}");
        return match fallback_for(&full) {
            Some(fallback) => format!("{variants}{role}-[var(--{full},{fallback})]"),
            None => token.to_string(),
        };
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_tokens() {
        assert_eq!(
            resolve_token("bg-semantic-surface-default"),
            "bg-[var(--semantic-surface-default,#ffffff)]"
        );
        assert_eq!(
            resolve_token("text-semantic-content-primary"),
            "text-[var(--semantic-content-primary,#0f172a)]"
        );
    }

    #[test]
    fn preserves_variant_chains() {
        assert_eq!(
            resolve_token("hover:bg-semantic-accent-emphasis"),
            "hover:bg-[var(--semantic-accent-emphasis,#1d4ed8)]"
        );
        assert_eq!(
            resolve_token("dark:focus:ring-semantic-border-focus"),
            "dark:focus:ring-[var(--semantic-border-focus,#2563eb)]"
        );
    }

    #[test]
    fn unknown_tokens_are_unchanged() {
        assert_eq!(resolve_token("bg-semantic-foo-bar"), "bg-semantic-foo-bar");
        assert_eq!(resolve_token("bg-red-500"), "bg-red-500");
        assert_eq!(resolve_token("semantic-surface-default"), "semantic-surface-default");
    }

    #[test]
    fn class_list_round_trip() {
        let list = "flex bg-semantic-surface-muted text-semantic-content-secondary";
        assert_eq!(
            resolve_class_list(list),
            "flex bg-[var(--semantic-surface-muted,#f8fafc)] text-[var(--semantic-content-secondary,#475569)]"
        );
    }
}
