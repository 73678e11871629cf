//! Property tests for the rewrite invariants: token-count preservation and
//! idempotence under repeated rewriting.

use proptest::prelude::*;

use stitch_core::{rewrite_class_list, rewrite_token};

/// Arbitrary junk tokens: the split/rejoin contract may not change the
/// token count for any input, class-like or not.
fn junk_token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_&=.\\[\\]-]{0,12}").unwrap()
}

/// Realistic class tokens: optional variant chain, optional negation, a
/// utility body of hyphenated segments.
fn class_token() -> impl Strategy<Value = String> {
    let variant = prop_oneof![
        Just(String::new()),
        Just("hover:".to_string()),
        Just("focus-visible:".to_string()),
        Just("sm:".to_string()),
        Just("2xl:".to_string()),
        Just("hover:focus:".to_string()),
        Just("data-[state=open]:".to_string()),
        Just("group-[.toast]:".to_string()),
    ];
    let sign = prop_oneof![Just(String::new()), Just("-".to_string())];
    let body = proptest::string::string_regex("[a-z]{1,8}(-[a-z0-9]{1,4}){0,3}").unwrap();
    (variant, sign, body).prop_map(|(v, s, b)| format!("{v}{s}{b}"))
}

proptest! {
    #[test]
    fn token_count_is_preserved(tokens in proptest::collection::vec(junk_token(), 0..12)) {
        let list = tokens.join(" ");
        let rewritten = rewrite_class_list(&list, "tw-");
        prop_assert_eq!(
            rewritten.split(' ').count(),
            list.split(' ').count()
        );
    }

    #[test]
    fn token_rewrite_is_idempotent(token in class_token()) {
        let once = rewrite_token(&token, "tw-");
        let twice = rewrite_token(&once, "tw-");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn variant_chain_survives_rewrite(token in class_token()) {
        let rewritten = rewrite_token(&token, "tw-");
        // The rewritten token always ends with the original body text.
        prop_assert!(rewritten.ends_with(token.rsplit(':').next().unwrap().trim_start_matches('-')));
    }
}
