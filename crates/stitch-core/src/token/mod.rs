//! Per-token prefix rewriting.
//!
//! A class list is split on single spaces, every token is rewritten
//! independently, and the tokens are rejoined with single spaces, so token
//! count and order are always preserved. Variant chains and arbitrary
//! selectors are preserved verbatim; the prefix lands immediately before
//! the utility body, after a leading `-` on negative utilities.

/// Rewrite a whole class-list string. Identity when the prefix is empty.
pub fn rewrite_class_list(list: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return list.to_string();
    }
    list.split(' ')
        .map(|token| rewrite_token(token, prefix))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrite one whitespace-delimited token.
///
/// Already-prefixed utility bodies are returned unchanged, which makes the
/// whole pipeline idempotent under repeated invocation.
pub fn rewrite_token(token: &str, prefix: &str) -> String {
    if token.is_empty() || prefix.is_empty() {
        return token.to_string();
    }

    // Plain attribute values such as `aria-expanded` or `data-state`.
    if (token.starts_with("aria-") || token.starts_with("data-"))
        && !token.contains('[')
        && !token.contains(':')
    {
        return token.to_string();
    }

    // Leading arbitrary-selector wrapper, e.g. `[&_svg]:pointer-events-none`.
    if let Some(body_start) = selector_wrapper_end(token) {
        let (selector, body) = token.split_at(body_start);
        return format!("{selector}{}", prefix_body(body, prefix));
    }

    // Leading variant chain, e.g. `hover:focus:` or `data-[state=open]:`.
    let chain_end = variant_chain_end(token);
    if chain_end > 0 {
        let (variants, body) = token.split_at(chain_end);
        return format!("{variants}{}", prefix_body(body, prefix));
    }

    prefix_body(token, prefix)
}

/// Insert the prefix into a bare utility body, after a leading `-`.
fn prefix_body(body: &str, prefix: &str) -> String {
    if let Some(positive) = body.strip_prefix('-') {
        // A lone `-` is not a utility; leave it alone.
        if positive.is_empty() || positive.starts_with(prefix) {
            return body.to_string();
        }
        return format!("-{prefix}{positive}");
    }
    if body.is_empty() || body.starts_with(prefix) {
        return body.to_string();
    }
    format!("{prefix}{body}")
}

/// Length of the variant chain at the start of `token`, in bytes.
/// Zero when the token has no leading variants.
pub(crate) fn variant_chain_end(token: &str) -> usize {
    let bytes = token.as_bytes();
    let mut pos = 0usize;
    loop {
        let segment = variant_segment_len(&bytes[pos..]);
        if segment == 0 {
            return pos;
        }
        pos += segment;
    }
}

/// Length of one colon-terminated variant segment at the start of `rest`:
/// either a `data-`/`aria-`/`group-`/`peer-` attribute-bracket selector or a
/// lowercase identifier segment. Zero when no segment matches.
fn variant_segment_len(rest: &[u8]) -> usize {
    const BRACKET_HEADS: &[&[u8]] = &[b"data-[", b"aria-[", b"group-[", b"peer-["];
    for head in BRACKET_HEADS {
        if rest.starts_with(head) {
            let open = head.len() - 1;
            if let Some(close) = matching_square_bracket(rest, open) {
                if rest.get(close + 1) == Some(&b':') {
                    return close + 2;
                }
            }
            // Unbalanced or not colon-terminated: not a variant segment.
            return 0;
        }
    }

    if !rest.first().is_some_and(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
        return 0;
    }
    let mut i = 0;
    while i < rest.len()
        && (rest[i].is_ascii_lowercase() || rest[i].is_ascii_digit() || rest[i] == b'-')
    {
        i += 1;
    }
    if rest.get(i) == Some(&b':') {
        i + 1
    } else {
        0
    }
}

/// Byte offset just past the `]:` that closes a leading arbitrary-selector
/// wrapper, tracking nested brackets. None when the token does not start
/// with a wrapper or the wrapper never closes.
fn selector_wrapper_end(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.first() != Some(&b'[') {
        return None;
    }
    let close = matching_square_bracket(bytes, 0)?;
    if bytes.get(close + 1) == Some(&b':') {
        Some(close + 2)
    } else {
        None
    }
}

/// Index of the `]` matching the `[` at `open`, or None when unbalanced.
fn matching_square_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
