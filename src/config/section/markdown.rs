//! `[markdown]` rendering configuration.
//!
//! Plugins are an explicit registration list: each entry names a plugin id
//! and carries an opaque options table that is passed through to the
//! generator verbatim.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! theme = "material-palenight"
//!
//! [[markdown.plugins]]
//! id = "mermaid"
//! [markdown.plugins.options]
//! theme = "dark"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Syntax highlight theme: a single name, or one per color mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkdownTheme {
    /// One theme for both modes (e.g. "material-palenight").
    Single(String),

    /// Separate themes for light and dark mode.
    DualMode { light: String, dark: String },
}

impl Default for MarkdownTheme {
    fn default() -> Self {
        Self::Single("default".into())
    }
}

/// A single plugin registration: id plus opaque options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Plugin identifier resolved by the generator (e.g. "mermaid").
    pub id: String,

    /// Options passed to the plugin verbatim.
    pub options: toml::Table,
}

/// Markdown rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown")]
pub struct MarkdownConfig {
    /// Highlight theme name, or { light = "...", dark = "..." }.
    #[config(default = "default", inline_doc)]
    pub theme: MarkdownTheme,

    /// Plugin registrations, applied in order.
    #[config(skip)]
    pub plugins: Vec<PluginConfig>,
}

impl MarkdownConfig {
    /// Validate theme names and plugin registrations.
    ///
    /// # Checks
    /// - theme name(s) must not be empty
    /// - plugin ids must be non-empty and unique
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match &self.theme {
            MarkdownTheme::Single(name) => {
                if name.trim().is_empty() {
                    diag.error(Self::FIELDS.theme, "theme name must not be empty");
                }
            }
            MarkdownTheme::DualMode { light, dark } => {
                if light.trim().is_empty() || dark.trim().is_empty() {
                    diag.error_with_hint(
                        Self::FIELDS.theme,
                        "both light and dark theme names must be set",
                        "e.g.: theme = { light = \"github-light\", dark = \"github-dark\" }",
                    );
                }
            }
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (index, plugin) in self.plugins.iter().enumerate() {
            if plugin.id.trim().is_empty() {
                diag.error(
                    FieldPath::indexed("markdown.plugins", index, "id"),
                    "must not be empty",
                );
            } else if !seen.insert(plugin.id.as_str()) {
                diag.error_with_hint(
                    FieldPath::indexed("markdown.plugins", index, "id"),
                    format!("plugin '{}' registered twice", plugin.id),
                    "merge the two registrations into one entry",
                );
            }
        }
    }
}
