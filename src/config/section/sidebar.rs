//! `[[sidebar]]` configuration for sidebar groups.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! heading = "Core Concepts"
//! items = [
//!     { text = "Session Management", link = "/core-concepts/session-management" },
//! ]
//! ```

use crate::config::section::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A named, ordered collection of links shown in the side navigation panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarGroup {
    /// Group heading shown above the items.
    pub heading: String,

    /// Links in display order. Must not be empty.
    pub items: Vec<NavItem>,
}

/// Validate all sidebar groups.
///
/// # Checks
/// - `heading` must be non-empty and unique across groups
/// - `items` must not be empty
/// - every item link must be a site-root-relative route
pub fn validate_sidebar(sidebar: &[SidebarGroup], diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for (index, group) in sidebar.iter().enumerate() {
        let heading = group.heading.trim();

        if heading.is_empty() {
            diag.error(
                FieldPath::indexed("sidebar", index, "heading"),
                "must not be empty",
            );
        } else if !seen.insert(heading) {
            diag.error_with_hint(
                FieldPath::indexed("sidebar", index, "heading"),
                format!("duplicate heading '{}'", heading),
                "sidebar headings must be unique within the rendered sidebar",
            );
        }

        if group.items.is_empty() {
            diag.error_with_hint(
                FieldPath::indexed("sidebar", index, "items"),
                "must contain at least one entry",
                "add an item, e.g.: { text = \"Introduction\", link = \"/guide/introduction\" }",
            );
        }

        let section = format!("sidebar[{index}].items");
        for (item_index, item) in group.items.iter().enumerate() {
            item.validate(&section, item_index, false, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn group(heading: &str, links: &[(&str, &str)]) -> SidebarGroup {
        SidebarGroup {
            heading: heading.into(),
            items: links
                .iter()
                .map(|(text, link)| NavItem {
                    text: (*text).into(),
                    link: (*link).into(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_parse_sidebar_groups() {
        let config = test_parse_config(
            r#"
[[sidebar]]
heading = "Features"
items = [
    { text = "Trainee Availability System", link = "/features/trainee-availability" },
]
"#,
        );
        assert_eq!(config.sidebar.len(), 1);
        assert_eq!(config.sidebar[0].heading, "Features");
        assert_eq!(config.sidebar[0].items.len(), 1);
        assert_eq!(
            config.sidebar[0].items[0].link,
            "/features/trainee-availability"
        );
    }

    #[test]
    fn test_valid_groups_pass() {
        let sidebar = vec![
            group("Core Concepts", &[("Sessions", "/core-concepts/sessions")]),
            group("Features", &[("Availability", "/features/availability")]),
        ];

        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sidebar, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_duplicate_heading_rejected() {
        let sidebar = vec![
            group("Features", &[("A", "/a")]),
            group("Features", &[("B", "/b")]),
        ];

        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sidebar, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "sidebar[1].heading");
    }

    #[test]
    fn test_empty_group_rejected() {
        let sidebar = vec![group("Empty", &[])];

        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sidebar, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_item_paths_are_indexed() {
        let sidebar = vec![group("Features", &[("Broken", "features/broken")])];

        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sidebar, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "sidebar[0].items[0].link");
    }
}
