//! `[[nav]]` configuration for top navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! text = "Home"
//! link = "/"
//!
//! [[nav]]
//! text = "Features"
//! link = "/features/"
//! ```

use crate::config::util::{is_external_link, is_site_relative};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A single navigation link (label + target route).
///
/// Used both for top navigation entries and for sidebar group items.
/// Ordering in the config file is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Display label.
    pub text: String,

    /// Target route: site-root-relative (`/guide/`) or, for top
    /// navigation only, an absolute http(s) URL.
    pub link: String,
}

impl Default for NavItem {
    fn default() -> Self {
        Self {
            text: String::new(),
            link: String::new(),
        }
    }
}

impl NavItem {
    /// Validate one entry under the given array section (e.g. `nav`).
    ///
    /// `allow_external` permits absolute http(s) URLs; sidebar items pass
    /// `false` since they must resolve within the site.
    pub fn validate(
        &self,
        section: &str,
        index: usize,
        allow_external: bool,
        diag: &mut ConfigDiagnostics,
    ) {
        if self.text.trim().is_empty() {
            diag.error(
                FieldPath::indexed(section, index, "text"),
                "must not be empty",
            );
        }

        if self.link.is_empty() {
            diag.error_with_hint(
                FieldPath::indexed(section, index, "link"),
                "must not be empty",
                "use a site-root-relative route, e.g.: \"/features/\"",
            );
            return;
        }

        if is_site_relative(&self.link) {
            return;
        }

        if is_external_link(&self.link) {
            if allow_external
                && (self.link.starts_with("http://") || self.link.starts_with("https://"))
            {
                return;
            }
            let (message, hint) = if allow_external {
                (
                    format!("'{}' must use http or https", self.link),
                    "external links must be full http(s) URLs",
                )
            } else {
                (
                    format!("'{}' is external, sidebar links must stay within the site", self.link),
                    "use a leading slash, e.g.: \"/features/trainee-availability\"",
                )
            };
            diag.error_with_hint(FieldPath::indexed(section, index, "link"), message, hint);
            return;
        }

        let hint = if allow_external {
            "use a leading slash or a full http(s) URL"
        } else {
            "use a leading slash, e.g.: \"/features/trainee-availability\""
        };
        diag.error_with_hint(
            FieldPath::indexed(section, index, "link"),
            format!("'{}' is not a resolvable site route", self.link),
            hint,
        );
    }
}

/// Validate all top navigation entries.
pub fn validate_nav(nav: &[NavItem], diag: &mut ConfigDiagnostics) {
    for (index, item) in nav.iter().enumerate() {
        item.validate("nav", index, true, diag);
    }
}
