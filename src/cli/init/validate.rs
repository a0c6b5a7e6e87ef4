//! Pre-initialization target checks.

use anyhow::{Result, bail};
use std::path::Path;

/// Where the new project is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `docsite init name` - create a new directory
    NewDir,
    /// `docsite init` - initialize the current directory
    CurrentDir,
}

/// Validate the init target directory.
///
/// # Checks
/// - the config file must not already exist at the target
/// - for `NewDir`, an existing target must be an empty directory
pub fn validate_target(root: &Path, config_path: &Path, mode: InitMode) -> Result<()> {
    if config_path.exists() {
        bail!("config file '{}' already exists", config_path.display());
    }

    if mode == InitMode::NewDir
        && root.exists()
        && root.read_dir()?.next().is_some()
    {
        bail!("directory '{}' already exists and is not empty", root.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_current_dir_ok_when_no_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("docsite.toml");
        assert!(validate_target(temp.path(), &config, InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_existing_config_rejected() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("docsite.toml");
        std::fs::write(&config, "").unwrap();
        assert!(validate_target(temp.path(), &config, InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_custom_config_name_checked() {
        // `docsite -C custom.toml init` must check the configured name
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("custom.toml");
        std::fs::write(&config, "").unwrap();
        assert!(validate_target(temp.path(), &config, InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_new_dir_must_be_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("note.txt"), "hi").unwrap();
        let config = temp.path().join("docsite.toml");
        assert!(validate_target(temp.path(), &config, InitMode::NewDir).is_err());
    }

    #[test]
    fn test_new_dir_nonexistent_ok() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("new-project");
        let config = target.join("docsite.toml");
        assert!(validate_target(&target, &config, InitMode::NewDir).is_ok());
    }
}
