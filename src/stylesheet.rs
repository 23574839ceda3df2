//! Diagram palette
//!
//! The arm diagram refers to symbolic color tokens (`diagram-elbow`,
//! `base-200`, ...). A stylesheet maps those tokens to concrete colors and is
//! passed to the renderer explicitly, so switching palettes never touches the
//! geometry.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping symbolic colors to concrete values
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> hex color
    pub colors: BTreeMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette: coral shoulder, pink elbow, green wrist on neutral surfaces
const DEFAULT_COLORS: [(&str, &str); 7] = [
    ("diagram-shoulder", "#f2404f"),
    ("diagram-elbow", "#ec4899"),
    ("diagram-wrist", "#059669"),
    ("base-100", "#ffffff"),
    ("base-200", "#f5f5f5"),
    ("base-300", "#dddddd"),
    ("base-content", "#333333"),
];

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a token, falling back to the default palette and then to a
    /// per-category color
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        if let Some((_, color)) = DEFAULT_COLORS.iter().find(|(name, _)| *name == token) {
            return color.to_string();
        }

        if token.starts_with("diagram") {
            return "#f2404f".to_string();
        }
        if token == "base-content" || token.starts_with("text") {
            return "#333333".to_string();
        }
        if token.starts_with("base") {
            return "#ffffff".to_string();
        }

        "#333333".to_string()
    }

    /// Every token the diagram uses, resolved, plus any extra tokens defined here
    pub fn resolved_colors(&self) -> BTreeMap<String, String> {
        let mut colors: BTreeMap<String, String> = DEFAULT_COLORS
            .iter()
            .map(|(token, _)| (token.to_string(), self.resolve_or_default(token)))
            .collect();
        for (token, value) in &self.colors {
            colors.insert(token.clone(), value.clone());
        }
        colors
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Stylesheet {
            name: Some("sleevies".to_string()),
            description: Some("Default arm diagram palette".to_string()),
            colors: DEFAULT_COLORS
                .iter()
                .map(|(token, color)| (token.to_string(), color.to_string()))
                .collect(),
        }
    }
}
