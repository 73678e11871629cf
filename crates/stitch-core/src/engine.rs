//! The rewrite engine: semantic resolution plus the five prefixing passes.
//!
//! One engine is built per configuration (site patterns are compiled once)
//! and is immutable afterwards, so any number of templates can be rewritten
//! concurrently against the same instance.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::Classifier;
use crate::config::{EngineConfig, TemplateCategory};
use crate::errors::ConfigError;
use crate::scanner::{
    rewrite_class_attrs, rewrite_helper_args, rewrite_merge_calls, rewrite_object_values,
    rewrite_variant_defs, RewriteFn, SitePatterns,
};
use crate::{semantic, token};

/// One template's source text, as handed over by the installer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSource {
    pub path: String,
    pub source: String,
}

/// Counters for one rewrite invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewriteStats {
    /// Class strings touched by the semantic resolver.
    pub semantic_strings: usize,
    /// Class strings rewritten per prefixing pass.
    pub variant_def_strings: usize,
    pub merge_call_strings: usize,
    pub class_attr_strings: usize,
    pub object_value_strings: usize,
    pub helper_arg_strings: usize,
    /// Wall time for the whole invocation.
    pub duration_us: u64,
}

impl RewriteStats {
    /// Total class strings rewritten by the prefixing passes.
    pub fn prefixed_strings(&self) -> usize {
        self.variant_def_strings
            + self.merge_call_strings
            + self.class_attr_strings
            + self.object_value_strings
            + self.helper_arg_strings
    }
}

/// Rewritten text plus its counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteOutcome {
    pub text: String,
    pub stats: RewriteStats,
}

/// Utility-class rewriting engine.
pub struct PrefixEngine {
    config: EngineConfig,
    classifier: Classifier,
    patterns: SitePatterns,
}

impl PrefixEngine {
    /// Build an engine, compiling the site patterns for this vocabulary.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let patterns = SitePatterns::compile(&config)?;
        Ok(Self {
            config,
            classifier: Classifier::new(),
            patterns,
        })
    }

    /// Engine with the default vocabulary.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default()).expect("default config is valid")
    }

    /// Engine with one template category's preset vocabulary.
    pub fn for_category(category: TemplateCategory) -> Self {
        Self::new(EngineConfig::for_category(category)).expect("category presets are valid")
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rewrite one template: resolve semantic tokens, then apply the
    /// namespace prefix. An empty prefix skips the prefixing passes.
    pub fn rewrite(&self, source: &str, prefix: &str) -> String {
        self.rewrite_with_stats(source, prefix).text
    }

    /// `rewrite`, returning per-pass counters alongside the text.
    pub fn rewrite_with_stats(&self, source: &str, prefix: &str) -> RewriteOutcome {
        let start = Instant::now();
        let mut stats = RewriteStats::default();

        let mut text = self.resolve_semantics_counted(source, &mut stats.semantic_strings);
        if !prefix.is_empty() {
            text = self.apply_prefix_passes(&text, prefix, &mut stats);
        }

        stats.duration_us = start.elapsed().as_micros() as u64;
        debug!(
            semantic = stats.semantic_strings,
            prefixed = stats.prefixed_strings(),
            duration_us = stats.duration_us,
            "template rewritten"
        );
        RewriteOutcome { text, stats }
    }

    /// Run only the semantic-token pass.
    pub fn resolve_semantics(&self, source: &str) -> String {
        self.resolve_semantics_counted(source, &mut 0)
    }

    /// Rewrite many templates in parallel. Invocations share no mutable
    /// state, so this is a plain data-parallel map.
    pub fn rewrite_batch(&self, templates: &[TemplateSource], prefix: &str) -> Vec<RewriteOutcome> {
        let outcomes: Vec<RewriteOutcome> = templates
            .par_iter()
            .map(|template| self.rewrite_with_stats(&template.source, prefix))
            .collect();
        debug!(
            templates = templates.len(),
            prefixed = outcomes.iter().map(|o| o.stats.prefixed_strings()).sum::<usize>(),
            "batch rewritten"
        );
        outcomes
    }

    fn resolve_semantics_counted(&self, source: &str, counter: &mut usize) -> String {
        let mut resolve = counting(counter, |s: &str| semantic::resolve_class_list(s));
        self.run_sites(source, &mut resolve, None)
    }

    fn apply_prefix_passes(&self, source: &str, prefix: &str, stats: &mut RewriteStats) -> String {
        let gate = &self.classifier;
        let pats = &self.patterns;

        let mut f = counting(&mut stats.variant_def_strings, |s: &str| {
            token::rewrite_class_list(s, prefix)
        });
        let text = rewrite_variant_defs(source, pats, gate, &mut f);

        let mut f = counting(&mut stats.merge_call_strings, |s: &str| {
            token::rewrite_class_list(s, prefix)
        });
        let text = rewrite_merge_calls(&text, pats, gate, &mut f);

        let mut f = counting(&mut stats.class_attr_strings, |s: &str| {
            token::rewrite_class_list(s, prefix)
        });
        let text = rewrite_class_attrs(&text, pats, gate, &mut f);

        let mut f = counting(&mut stats.object_value_strings, |s: &str| {
            token::rewrite_class_list(s, prefix)
        });
        let text = rewrite_object_values(&text, pats, gate, &mut f);

        let mut f = counting(&mut stats.helper_arg_strings, |s: &str| {
            token::rewrite_class_list(s, prefix)
        });
        rewrite_helper_args(&text, pats, gate, Some(prefix), &mut f)
    }

    /// Drive all five site walkers with one callback. Used by the semantic
    /// pass, which rewrites the same shapes the prefixing passes do.
    fn run_sites(&self, source: &str, f: RewriteFn, helper_guard: Option<&str>) -> String {
        let gate = &self.classifier;
        let pats = &self.patterns;
        let text = rewrite_variant_defs(source, pats, gate, f);
        let text = rewrite_merge_calls(&text, pats, gate, f);
        let text = rewrite_class_attrs(&text, pats, gate, f);
        let text = rewrite_object_values(&text, pats, gate, f);
        rewrite_helper_args(&text, pats, gate, helper_guard, f)
    }
}

impl Default for PrefixEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Wrap a class-list transform so that invocations which change the text
/// bump the pass counter.
fn counting<'a>(
    counter: &'a mut usize,
    mut transform: impl FnMut(&str) -> String + 'a,
) -> impl FnMut(&str) -> String + 'a {
    move |s: &str| {
        let out = transform(s);
        if out != s {
            *counter += 1;
        }
        out
    }
}
