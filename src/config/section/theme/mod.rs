//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.appearance]
//! default_mode = "dark"
//! disable_switch = true
//! ```

mod appearance;

pub use appearance::{AppearanceConfig, ColorMode};

use macros::Config;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Color mode settings.
    #[config(sub)]
    pub appearance: AppearanceConfig,
}
