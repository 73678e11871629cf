//! stitch-core: utility-class rewriting engine for the stitch installer.
//!
//! Installed component templates embed utility-class strings. This crate
//! rewrites them so they never collide with a host project's own classes:
//! - Classifier: decides whether a string literal is a set of utility
//!   classes or an unrelated string (prop value, component name, package)
//! - Token rewriter: prefixes one class token, preserving variant chains,
//!   negative values, and arbitrary bracketed selectors
//! - Site scanner: walks template source and rewrites the five syntactic
//!   shapes allowed to contain class strings
//! - Semantic token resolver: always-on pass replacing abstract color
//!   tokens with portable `var()` fallback expressions
//!
//! Everything is a pure string transformation: no IO, no shared mutable
//! state, and a fail-open policy where unparseable spans are left unchanged.

pub mod classify;
pub mod config;
pub mod engine;
pub mod errors;
pub mod semantic;
pub mod token;

mod scanner;

pub use classify::{ClassRule, Classifier};
pub use config::{EngineConfig, TemplateCategory};
pub use engine::{PrefixEngine, RewriteOutcome, RewriteStats, TemplateSource};
pub use errors::ConfigError;
pub use token::{rewrite_class_list, rewrite_token};

use once_cell::sync::Lazy;

static DEFAULT_ENGINE: Lazy<PrefixEngine> = Lazy::new(PrefixEngine::with_defaults);

/// Rewrite one template with the default vocabulary.
pub fn rewrite(source: &str, prefix: &str) -> String {
    DEFAULT_ENGINE.rewrite(source, prefix)
}

/// Resolve semantic tokens in one template with the default vocabulary.
pub fn resolve_semantics(source: &str) -> String {
    DEFAULT_ENGINE.resolve_semantics(source)
}
