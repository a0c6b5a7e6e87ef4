//! `[site]` configuration.
//!
//! Contains basic site information like title and description.
//! These values are handed to the site generator as-is.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site metadata shown in page chrome and `<head>` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Site title.
    #[config(inline_doc)]
    pub title: String,

    /// Site description.
    #[config(inline_doc)]
    pub description: String,

    /// Logo path, site-root-relative (e.g. "/logo.png").
    #[config(inline_doc)]
    pub logo: Option<String>,

    /// Deployed site URL (e.g. "https://docs.example.com").
    #[config(inline_doc)]
    pub base_url: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            logo: None,
            base_url: None,
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` and `description` must not be empty
    /// - `base_url`, if set, must be a valid http(s) URL with a host
    /// - `logo`, if set, must be a site-root-relative path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "must not be empty",
                "set a site title, e.g.: \"Pilates Studio Documentation\"",
            );
        }

        if self.description.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.description,
                "must not be empty",
                "set a one-line description of the site",
            );
        }

        if let Some(logo) = &self.logo
            && !logo.starts_with('/')
        {
            diag.error_with_hint(
                Self::FIELDS.logo,
                format!("'{}' is not site-root-relative", logo),
                "use a leading slash, e.g.: \"/logo.png\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.base_url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.base_url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    } else if parsed.scheme() == "http" {
                        diag.warn(
                            Self::FIELDS.base_url,
                            "uses http, deployed sites should prefer https",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.base_url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.base_url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}
