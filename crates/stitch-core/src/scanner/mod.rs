//! Site scanning: locating and rewriting the syntactic shapes that are
//! allowed to contain class strings.
//!
//! Five site shapes in fixed order: variant-definition base argument,
//! class-merge invocation, markup class attribute, object-literal string
//! value, named-helper-call argument. Sites are computed fresh per pass;
//! each pass consumes the previous pass's output.

pub(crate) mod brackets;
pub(crate) mod sites;

pub(crate) use sites::{
    rewrite_class_attrs, rewrite_helper_args, rewrite_merge_calls, rewrite_object_values,
    rewrite_variant_defs, RewriteFn, SitePatterns,
};
