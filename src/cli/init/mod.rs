//! Project initialization module.
//!
//! Creates a new documentation project with a commented default
//! configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization target checks
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{fs, path::Path};

pub use validate::InitMode;

/// Directory for markdown content, created on init.
const DOCS_DIR: &str = "docs";

/// Create a new documentation project with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create the docs/ content directory
/// 3. Write configuration and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_project(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate::validate_target(root, &site_config.config_path, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    create_structure(root)?;

    config::write_config(&site_config.config_path)?;
    config::write_ignore_files(root)?;

    log!("init"; "Project initialized successfully");
    Ok(())
}

/// Create the project directory structure.
fn create_structure(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join(DOCS_DIR))
        .with_context(|| format!("Failed to create '{}'", root.join(DOCS_DIR).display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        create_structure(temp.path()).unwrap();
        assert!(temp.path().join("docs").is_dir());
    }
}
