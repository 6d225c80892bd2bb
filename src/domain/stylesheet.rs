//! CSS build-tool descriptor: typed model, parsing, validation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::color::is_hex_color;
use crate::error::AppError;

/// Color roles the palette plugin recognizes.
pub const KNOWN_COLOR_ROLES: &[&str] = &[
    "primary",
    "primary-content",
    "secondary",
    "secondary-content",
    "accent",
    "accent-content",
    "neutral",
    "neutral-content",
    "base-100",
    "base-200",
    "base-300",
    "base-content",
    "info",
    "info-content",
    "success",
    "success-content",
    "warning",
    "warning-content",
    "error",
    "error-content",
];

/// Top-level build-tool descriptor (`deploy/stylesheet.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylesheetConfig {
    /// Glob patterns scanned for class-name usage, in order.
    #[serde(default)]
    pub content: Vec<String>,
    /// Plugin references, activated in order.
    ///
    /// Declared before the tables so TOML serialization keeps values
    /// ahead of table headers.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Design-token section.
    #[serde(default)]
    pub theme: ThemeSection,
    /// Named palettes handed to the palette plugin.
    #[serde(default)]
    pub themes: Vec<ThemeSpec>,
}

/// The `theme` table of the descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    /// Free-form design-token overrides merged over the framework defaults.
    #[serde(default)]
    pub extend: toml::Table,
}

/// A named palette mapping semantic color roles to hex values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSpec {
    pub name: String,
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl StylesheetConfig {
    /// All violated schema invariants, in declaration order.
    pub fn violations(&self) -> Vec<AppError> {
        let mut violations = Vec::new();

        if self.content.is_empty() {
            violations.push(AppError::NoContentGlobs);
        }
        if self.content.iter().any(|glob| glob.trim().is_empty()) {
            violations.push(AppError::EmptyContentGlob);
        }

        for (index, theme) in self.themes.iter().enumerate() {
            if theme.name.trim().is_empty() {
                violations.push(AppError::EmptyThemeName(index));
            }
            for (role, value) in &theme.colors {
                if !is_hex_color(value) {
                    violations.push(AppError::InvalidColor {
                        theme: theme.name.clone(),
                        role: role.clone(),
                        value: value.clone(),
                    });
                }
            }
        }

        let mut seen = BTreeSet::new();
        for plugin in &self.plugins {
            if !seen.insert(plugin.as_str()) {
                violations.push(AppError::DuplicatePlugin(plugin.clone()));
            }
        }

        violations
    }

    /// Validate, failing on the first violated invariant.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Palette roles outside the plugin's recognized vocabulary.
    ///
    /// Legal but ignored by the palette plugin, so `check` reports them
    /// as warnings rather than errors.
    pub fn unknown_roles(&self) -> Vec<(String, String)> {
        self.themes
            .iter()
            .flat_map(|theme| {
                theme
                    .colors
                    .keys()
                    .filter(|role| !KNOWN_COLOR_ROLES.contains(&role.as_str()))
                    .map(|role| (theme.name.clone(), role.clone()))
            })
            .collect()
    }
}

/// Parse and validate a stylesheet descriptor from TOML content.
pub fn parse_stylesheet_config(content: &str) -> Result<StylesheetConfig, AppError> {
    let config: StylesheetConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
