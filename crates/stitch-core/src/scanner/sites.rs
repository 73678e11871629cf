//! The five rewrite-site shapes.
//!
//! Each pass locates one syntactic shape that is allowed to contain class
//! strings, gates every candidate through the classifier, and hands accepted
//! candidates to a rewrite callback. The same walkers drive both the
//! prefixing pipeline and the semantic token resolver, so the site-detection
//! logic exists exactly once.
//!
//! All passes fail open: an unmatched bracket or unparseable span leaves the
//! original substring unchanged and the scan continues.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::brackets::{ident_continues_before, matching_paren, skip_string};
use crate::classify::{has_variant_marker, Classifier};
use crate::config::EngineConfig;
use crate::errors::ConfigError;

/// Object keys that never hold style classes: display names, identifiers,
/// and accessibility text. Overridden per value when the value carries an
/// unambiguous variant marker.
const KEY_DENYLIST: &[&str] = &[
    "name", "displayName", "id", "key", "title", "alt", "label",
    "ariaLabel", "aria-label", "description", "placeholder", "value",
];

static KEY_DENYLIST_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| KEY_DENYLIST.iter().copied().collect());

/// Rewrite callback applied to accepted class-list strings.
pub(crate) type RewriteFn<'a> = &'a mut dyn FnMut(&str) -> String;

/// Site patterns precompiled from one engine configuration.
pub(crate) struct SitePatterns {
    /// Variant-definition helper with a double-quoted base argument.
    variant_def: Option<Regex>,
    /// Class-merge helper call heads (`name(`), located by multi-pattern
    /// search; the argument span is delimited by the depth counter.
    merge_calls: AhoCorasick,
    /// Markup class attribute with a direct double-quoted literal.
    class_attr: Option<Regex>,
    /// Object-literal `key: "value"` pairs, bare or quoted key, both
    /// value quote styles.
    object_entry: Regex,
    /// Named project helpers whose first quoted argument is a class list.
    named_helper: Option<Regex>,
}

impl SitePatterns {
    pub(crate) fn compile(config: &EngineConfig) -> Result<Self, ConfigError> {
        let variant_def = call_head_regex(&config.variant_helpers)?;

        let merge_heads: Vec<String> = config
            .merge_helpers
            .iter()
            .map(|name| format!("{name}("))
            .collect();
        let merge_calls = AhoCorasick::new(&merge_heads)
            .map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;

        let class_attr = if config.class_attributes.is_empty() {
            None
        } else {
            let alts = config.class_attributes.join("|");
            Some(compile(&format!(r#"(\b(?:{alts})\s*=\s*")([^"]*)""#))?)
        };

        let object_entry = compile(
            r#"(?P<key>"[A-Za-z_$][\w$-]*"|'[A-Za-z_$][\w$-]*'|\b[A-Za-z_$][\w$]*)(?P<sep>\s*:\s*)(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#,
        )?;

        let named_helper = if config.named_helpers.is_empty() {
            None
        } else {
            let alts = config.named_helpers.join("|");
            Some(compile(&format!(
                r#"(\b(?:{alts})\(\s*)(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#
            ))?)
        };

        Ok(Self {
            variant_def,
            merge_calls,
            class_attr,
            object_entry,
            named_helper,
        })
    }
}

fn call_head_regex(names: &[String]) -> Result<Option<Regex>, ConfigError> {
    if names.is_empty() {
        return Ok(None);
    }
    let alts = names.join("|");
    Ok(Some(compile(&format!(
        r#"(\b(?:{alts})\(\s*")([^"]*)""#
    ))?))
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern(e.to_string()))
}

/// Pass 1: variant-definition base argument.
pub(crate) fn rewrite_variant_defs(
    source: &str,
    patterns: &SitePatterns,
    gate: &Classifier,
    f: RewriteFn,
) -> String {
    let Some(re) = &patterns.variant_def else {
        return source.to_string();
    };
    re.replace_all(source, |caps: &Captures| {
        let content = &caps[2];
        if gate.classify(content) {
            format!("{}{}\"", &caps[1], f(content))
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

/// Pass 2: class-merge invocations. The matching closing parenthesis is
/// found by depth counting, so nested parenthesized expressions inside the
/// arguments survive intact; every quoted string inside the argument span
/// is classified and rewritten individually.
pub(crate) fn rewrite_merge_calls(
    source: &str,
    patterns: &SitePatterns,
    gate: &Classifier,
    f: RewriteFn,
) -> String {
    let bytes = source.as_bytes();
    let mut out = String::with_capacity(source.len());
    let mut last = 0usize;

    for m in patterns.merge_calls.find_iter(source) {
        // Skip call heads inside an argument span we already rewrote.
        if m.start() < last {
            continue;
        }
        // `fancn(` is not a call to `cn`.
        if ident_continues_before(bytes, m.start()) {
            continue;
        }
        let open = m.end() - 1;
        let Some(close) = matching_paren(bytes, open) else {
            continue;
        };
        out.push_str(&source[last..=open]);
        out.push_str(&rewrite_quoted_strings(&source[open + 1..close], gate, f));
        last = close;
    }

    out.push_str(&source[last..]);
    out
}

/// Pass 3: markup class attribute with a direct double-quoted literal.
pub(crate) fn rewrite_class_attrs(
    source: &str,
    patterns: &SitePatterns,
    gate: &Classifier,
    f: RewriteFn,
) -> String {
    let Some(re) = &patterns.class_attr else {
        return source.to_string();
    };
    re.replace_all(source, |caps: &Captures| {
        let content = &caps[2];
        if gate.classify(content) {
            format!("{}{}\"", &caps[1], f(content))
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

/// Pass 4: object-literal string values. Denylisted keys are skipped unless
/// the value independently carries an unambiguous variant marker.
pub(crate) fn rewrite_object_values(
    source: &str,
    patterns: &SitePatterns,
    gate: &Classifier,
    f: RewriteFn,
) -> String {
    patterns
        .object_entry
        .replace_all(source, |caps: &Captures| {
            let key_raw = caps.name("key").map_or("", |m| m.as_str());
            let key = key_raw.trim_matches(|c| c == '"' || c == '\'');
            let (quote, value) = match (caps.name("dq"), caps.name("sq")) {
                (Some(m), _) => ('"', m.as_str()),
                (_, Some(m)) => ('\'', m.as_str()),
                _ => return caps[0].to_string(),
            };

            if KEY_DENYLIST_SET.contains(key) && !has_variant_marker(value) {
                return caps[0].to_string();
            }
            if !gate.classify(value) {
                return caps[0].to_string();
            }

            let sep = caps.name("sep").map_or(":", |m| m.as_str());
            format!("{key_raw}{sep}{quote}{}{quote}", f(value))
        })
        .into_owned()
}

/// Pass 5: named-helper-call first quoted argument. `skip_containing`
/// guards against double-prefixing: these calls may sit nested inside text
/// already rewritten by the class-merge pass.
pub(crate) fn rewrite_helper_args(
    source: &str,
    patterns: &SitePatterns,
    gate: &Classifier,
    skip_containing: Option<&str>,
    f: RewriteFn,
) -> String {
    let Some(re) = &patterns.named_helper else {
        return source.to_string();
    };
    re.replace_all(source, |caps: &Captures| {
        let (quote, content) = match (caps.name("dq"), caps.name("sq")) {
            (Some(m), _) => ('"', m.as_str()),
            (_, Some(m)) => ('\'', m.as_str()),
            _ => return caps[0].to_string(),
        };
        if let Some(needle) = skip_containing {
            if !needle.is_empty() && content.contains(needle) {
                return caps[0].to_string();
            }
        }
        if gate.classify(content) {
            format!("{}{quote}{}{quote}", &caps[1], f(content))
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

/// Rewrite every single- or double-quoted string inside `text`, leaving all
/// other argument text (identifiers, ternaries, nested calls) untouched.
/// Template literals are skipped whole; unterminated literals are copied
/// verbatim.
fn rewrite_quoted_strings(text: &str, gate: &Classifier, f: RewriteFn) -> String {
    struct QuoteSpan {
        start: usize,
        end: usize,
    }

    let bytes = text.as_bytes();
    let mut spans: SmallVec<[QuoteSpan; 8]> = SmallVec::new();
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => {
                let end = skip_string(bytes, i);
                // Unterminated literal: leave the tail alone.
                if end <= bytes.len() && bytes.get(end - 1) == Some(&bytes[i]) && end > i + 1 {
                    spans.push(QuoteSpan { start: i, end });
                }
                i = end;
            }
            b'`' => i = skip_string(bytes, i),
            _ => i += 1,
        }
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0usize;
    for span in &spans {
        out.push_str(&text[last..span.start + 1]);
        let content = &text[span.start + 1..span.end - 1];
        if gate.classify(content) {
            out.push_str(&f(content));
        } else {
            out.push_str(content);
        }
        out.push_str(&text[span.end - 1..span.end]);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> SitePatterns {
        SitePatterns::compile(&EngineConfig::default()).unwrap()
    }

    fn prefix_fn(prefix: &str) -> impl FnMut(&str) -> String + '_ {
        move |s: &str| crate::token::rewrite_class_list(s, prefix)
    }

    #[test]
    fn merge_call_with_nested_ternary() {
        let src = r#"<div className={cn(active ? "bg-red-500" : "bg-gray-100", (open && "p-2"), className)} />"#;
        let gate = Classifier::new();
        let mut f = prefix_fn("tw-");
        let out = rewrite_merge_calls(src, &patterns(), &gate, &mut f);
        assert_eq!(
            out,
            r#"<div className={cn(active ? "tw-bg-red-500" : "tw-bg-gray-100", (open && "tw-p-2"), className)} />"#
        );
    }

    #[test]
    fn unbalanced_merge_call_is_left_alone() {
        let src = r#"const x = cn("flex", other"#;
        let gate = Classifier::new();
        let mut f = prefix_fn("tw-");
        let out = rewrite_merge_calls(src, &patterns(), &gate, &mut f);
        assert_eq!(out, src);
    }

    #[test]
    fn object_value_denylist_respected_and_overridden() {
        let gate = Classifier::new();
        let mut f = prefix_fn("tw-");
        let pats = patterns();

        let skipped = rewrite_object_values(r#"title: "flex gap-2""#, &pats, &gate, &mut f);
        assert_eq!(skipped, r#"title: "flex gap-2""#);

        let overridden = rewrite_object_values(
            r#"title: "group-[.toast]:font-semibold""#,
            &pats,
            &gate,
            &mut f,
        );
        assert_eq!(
            overridden,
            r#"title: "group-[.toast]:tw-font-semibold""#
        );
    }

    #[test]
    fn helper_arg_guard_blocks_existing_prefix() {
        let gate = Classifier::new();
        let config = EngineConfig {
            named_helpers: vec!["focusRing".to_string()],
            ..EngineConfig::default()
        };
        let pats = SitePatterns::compile(&config).unwrap();
        let mut f = prefix_fn("tw-");

        let fresh = rewrite_helper_args(
            r#"focusRing("ring-2 ring-offset-2")"#,
            &pats,
            &gate,
            Some("tw-"),
            &mut f,
        );
        assert_eq!(fresh, r#"focusRing("tw-ring-2 tw-ring-offset-2")"#);

        let guarded = rewrite_helper_args(
            r#"focusRing("tw-ring-2")"#,
            &pats,
            &gate,
            Some("tw-"),
            &mut f,
        );
        assert_eq!(guarded, r#"focusRing("tw-ring-2")"#);
    }
}
