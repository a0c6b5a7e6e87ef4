//! Configuration file generation.
//!
//! Creates the config file and ignore files for new projects.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{AppearanceConfig, MarkdownConfig, SiteInfoConfig};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Docsite configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/docsite-rs/docsite\n\n");

    // [site] section
    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    // [theme.appearance] section
    out.push_str(&AppearanceConfig::template_with_header());
    out.push('\n');

    // [[nav]] entries
    out.push_str("# Top navigation entries, in display order.\n");
    out.push_str("[[nav]]\ntext = \"Home\"\nlink = \"/\"\n\n");
    out.push_str("[[nav]]\ntext = \"Guide\"\nlink = \"/guide/\"\n\n");

    // [[sidebar]] groups
    out.push_str("# Sidebar groups, in display order. Each group needs at least one item.\n");
    out.push_str("[[sidebar]]\nheading = \"Getting Started\"\nitems = [\n");
    out.push_str("    { text = \"Introduction\", link = \"/guide/introduction\" },\n");
    out.push_str("]\n\n");

    // [markdown] section
    out.push_str(&MarkdownConfig::template_with_header());
    out.push('\n');

    // Plugin registration example (commented out)
    out.push_str("\n# Plugin registrations, applied in order:\n");
    out.push_str("# [[markdown.plugins]]\n");
    out.push_str("# id = \"mermaid\"\n");
    out.push_str("# [markdown.plugins.options]\n");
    out.push_str("# theme = \"dark\"\n");

    out
}

/// Write the default configuration to the configured path (honors `-C`).
pub fn write_config(config_path: &Path) -> Result<()> {
    let content = generate_config_template();

    fs::write(config_path, content)
        .with_context(|| format!("Failed to write config file '{}'", config_path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/dist/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("docsite.toml");
        write_config(&config_path).unwrap();
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[theme.appearance]"));
        assert!(content.contains("[[nav]]"));
        assert!(content.contains("[[sidebar]]"));
        assert!(content.contains("[markdown]"));
    }

    #[test]
    fn test_write_config_custom_name() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("custom.toml");
        write_config(&config_path).unwrap();
        assert!(config_path.exists());
        assert!(!temp.path().join("docsite.toml").exists());
    }

    #[test]
    fn test_template_parses_cleanly() {
        // The generated template must round-trip through our own parser
        // with no unknown fields.
        let template = generate_config_template();
        let (_, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {:?}", ignored);
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path()).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains("/dist/"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
