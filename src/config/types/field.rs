//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteInfoConfig {
///     pub title: String,
/// }
///
/// // Generated:
/// impl SiteInfoConfig {
///     pub const FIELDS: SiteInfoConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteInfoConfig::FIELDS.title, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Build an indexed path for array-of-tables entries (e.g. `nav[2].link`).
    ///
    /// The formatted path is leaked; diagnostics are terminal output whose
    /// count is bounded by the number of config entries.
    pub fn indexed(section: &str, index: usize, field: &str) -> Self {
        Self(Box::leak(
            format!("{section}[{index}].{field}").into_boxed_str(),
        ))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        let path = FieldPath::indexed("sidebar", 3, "heading");
        assert_eq!(path.as_str(), "sidebar[3].heading");
    }
}
