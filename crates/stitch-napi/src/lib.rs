//! NAPI bindings for the stitch rewrite engine.
//!
//! The installer CLI hands each template's source text and the resolved
//! namespace prefix across this boundary and writes the returned text to
//! disk. All heavy lifting stays in `stitch-core`; this crate only shapes
//! the data for JavaScript.

use napi_derive::napi;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use stitch_core::{PrefixEngine, TemplateCategory, TemplateSource};

const CONFIG_ERROR: &str = "STITCH_CONFIG_ERROR";

static DEFAULT_ENGINE: Lazy<PrefixEngine> = Lazy::new(PrefixEngine::with_defaults);

/// One template to rewrite, as sent from TypeScript.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsTemplate {
    pub path: String,
    pub source: String,
}

/// Rewrite result returned to TypeScript.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsRewriteResult {
    pub path: String,
    pub text: String,
    pub semantic_strings: u32,
    pub prefixed_strings: u32,
    pub duration_us: f64,
}

fn config_err(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(format!("[{CONFIG_ERROR}] {e}"))
}

fn parse_category(category: Option<&str>) -> napi::Result<Option<TemplateCategory>> {
    let Some(name) = category else {
        return Ok(None);
    };
    let parsed = match name {
        "primitives" => TemplateCategory::Primitives,
        "forms" => TemplateCategory::Forms,
        "navigation" => TemplateCategory::Navigation,
        "overlays" => TemplateCategory::Overlays,
        "charts" => TemplateCategory::Charts,
        "blocks" => TemplateCategory::Blocks,
        other => return Err(config_err(format!("unknown template category '{other}'"))),
    };
    Ok(Some(parsed))
}

fn engine_for(category: Option<TemplateCategory>) -> PrefixEngine {
    match category {
        Some(cat) => PrefixEngine::for_category(cat),
        None => PrefixEngine::with_defaults(),
    }
}

/// Rewrite one template: semantic tokens are resolved, then every class
/// string is namespaced with `prefix`. An empty prefix resolves semantic
/// tokens only.
#[napi]
pub fn rewrite_template(
    source: String,
    prefix: String,
    category: Option<String>,
) -> napi::Result<String> {
    match parse_category(category.as_deref())? {
        None => Ok(DEFAULT_ENGINE.rewrite(&source, &prefix)),
        Some(cat) => Ok(PrefixEngine::for_category(cat).rewrite(&source, &prefix)),
    }
}

/// Run only the semantic-token resolution pass.
#[napi]
pub fn resolve_semantic_tokens(source: String) -> String {
    DEFAULT_ENGINE.resolve_semantics(&source)
}

/// Rewrite a batch of templates in parallel and return per-template
/// counters alongside the text.
#[napi]
pub fn rewrite_templates(
    templates: Vec<JsTemplate>,
    prefix: String,
    category: Option<String>,
) -> napi::Result<Vec<JsRewriteResult>> {
    let engine = engine_for(parse_category(category.as_deref())?);
    let sources: Vec<TemplateSource> = templates
        .iter()
        .map(|t| TemplateSource {
            path: t.path.clone(),
            source: t.source.clone(),
        })
        .collect();

    let outcomes = engine.rewrite_batch(&sources, &prefix);
    Ok(templates
        .into_iter()
        .zip(outcomes)
        .map(|(template, outcome)| JsRewriteResult {
            path: template.path,
            text: outcome.text,
            semantic_strings: outcome.stats.semantic_strings as u32,
            prefixed_strings: outcome.stats.prefixed_strings() as u32,
            duration_us: outcome.stats.duration_us as f64,
        })
        .collect())
}

/// The resolved engine vocabulary for a category, as JSON. The installer
/// surfaces this in its dry-run output.
#[napi]
pub fn category_config(category: Option<String>) -> napi::Result<String> {
    let engine = engine_for(parse_category(category.as_deref())?);
    serde_json::to_string_pretty(engine.config()).map_err(config_err)
}
