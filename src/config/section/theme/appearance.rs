//! `[theme.appearance]` configuration for color mode.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Color mode selection for the rendered site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the visitor's OS preference.
    #[default]
    Auto,

    /// Always dark.
    Dark,

    /// Always light.
    Light,
}

/// Appearance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.appearance")]
pub struct AppearanceConfig {
    /// Initial color mode: auto | dark | light.
    #[config(default = "auto", inline_doc)]
    pub default_mode: ColorMode,

    /// Hide the light/dark mode switch.
    #[config(inline_doc)]
    pub disable_switch: bool,

    /// Suffix appended to the generated mode CSS class.
    #[config(inline_doc)]
    pub class_suffix: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            default_mode: ColorMode::Auto,
            disable_switch: false,
            class_suffix: String::new(),
        }
    }
}

impl AppearanceConfig {
    /// Validate appearance settings.
    ///
    /// `class_suffix` ends up in a CSS class name, so it is restricted to
    /// characters valid there.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self
            .class_suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        {
            diag.error_with_hint(
                Self::FIELDS.class_suffix,
                format!("'{}' contains characters invalid in a CSS class", self.class_suffix),
                "use only letters, digits, '-' and '_'",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.appearance.default_mode, ColorMode::Auto);
        assert!(!config.theme.appearance.disable_switch);
        assert_eq!(config.theme.appearance.class_suffix, "");
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[theme.appearance]\ndefault_mode = \"dark\"\ndisable_switch = true\nclass_suffix = \"docs\"",
        );
        assert_eq!(config.theme.appearance.default_mode, ColorMode::Dark);
        assert!(config.theme.appearance.disable_switch);
        assert_eq!(config.theme.appearance.class_suffix, "docs");
    }

    #[test]
    fn test_invalid_class_suffix() {
        let appearance = AppearanceConfig {
            class_suffix: "bad suffix!".into(),
            ..AppearanceConfig::default()
        };

        let mut diag = ConfigDiagnostics::new();
        appearance.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
