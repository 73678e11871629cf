//! Engine configuration.
//!
//! The six template categories run the same rewrite logic; the only
//! differences between them are data: which helper functions and markup
//! attributes the scanner recognizes. `EngineConfig` carries exactly that
//! vocabulary, with per-category presets and TOML loading for projects
//! that customize their helper names.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// The six template categories shipped by the component library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    Primitives,
    Forms,
    Navigation,
    Overlays,
    Charts,
    Blocks,
}

impl TemplateCategory {
    /// Project-specific helper functions whose first quoted argument holds
    /// a class list, per category.
    fn named_helpers(self) -> &'static [&'static str] {
        match self {
            Self::Primitives => &["focusRing", "disabledStyles"],
            Self::Forms => &["focusRing", "fieldWrapper", "controlSize"],
            Self::Navigation => &["focusRing", "activeLink"],
            Self::Overlays => &["focusRing", "overlayBackdrop"],
            Self::Charts => &["chartContainer", "chartTooltip"],
            Self::Blocks => &["sectionSpacing"],
        }
    }
}

/// Site vocabulary for one engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Variant-definition helpers whose double-quoted first argument is the
    /// base class list.
    pub variant_helpers: Vec<String>,
    /// Class-merge helpers; every quoted string in their argument list is a
    /// rewrite candidate.
    pub merge_helpers: Vec<String>,
    /// Markup attributes holding a direct double-quoted class literal.
    pub class_attributes: Vec<String>,
    /// Named project helpers with a quoted class-list first argument.
    pub named_helpers: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant_helpers: vec!["cva".to_string()],
            merge_helpers: vec!["cn".to_string()],
            class_attributes: vec!["className".to_string()],
            named_helpers: Vec::new(),
        }
    }
}

static IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$-]*$").unwrap());

impl EngineConfig {
    /// Default vocabulary plus the named-helper list for one category.
    pub fn for_category(category: TemplateCategory) -> Self {
        Self {
            named_helpers: category
                .named_helpers()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Self::default()
        }
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate helper and attribute names. Names are spliced into site
    /// patterns, so anything that is not identifier-shaped is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("variant_helpers", &self.variant_helpers),
            ("merge_helpers", &self.merge_helpers),
            ("class_attributes", &self.class_attributes),
            ("named_helpers", &self.named_helpers),
        ];
        for (field, names) in fields {
            for name in names.iter() {
                if !IDENT_RE.is_match(name) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("'{name}' is not a valid identifier"),
                    });
                }
            }
        }
        Ok(())
    }
}
