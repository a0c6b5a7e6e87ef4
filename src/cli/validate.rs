//! Configuration validation command.

use anyhow::Result;

use crate::cli::ValidateArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::{plural_count, plural_s};

/// Validate the loaded configuration and report all diagnostics at once.
///
/// With `--warn-only`, errors are downgraded to warnings and the command
/// exits successfully.
pub fn validate_config(args: &ValidateArgs, config: &SiteConfig) -> Result<()> {
    log!("validate"; "checking {}", config.root_relative(&config.config_path).display());

    let diag = config.check();
    diag.print_warnings();

    if diag.has_errors() {
        if args.warn_only {
            for error in diag.errors() {
                log!("warning"; "[{}] {}", error.field.as_str(), error.message);
            }
            log!(
                "validate";
                "{} downgraded to warning{}",
                plural_count(diag.len(), "error"),
                plural_s(diag.len())
            );
            return Ok(());
        }
        anyhow::bail!(crate::config::ConfigError::Diagnostics(diag));
    }

    log!(
        "validate";
        "{}, {}, {}",
        plural_count(config.nav.len(), "nav item"),
        plural_count(config.sidebar.len(), "sidebar group"),
        plural_count(config.markdown.plugins.len(), "plugin")
    );
    log!("validate"; "configuration valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn args(warn_only: bool) -> ValidateArgs {
        ValidateArgs {
            warn_only,
            verbose: false,
        }
    }

    fn broken_config() -> SiteConfig {
        test_parse_config("[[nav]]\ntext = \"Broken\"\nlink = \"no-slash\"")
    }

    #[test]
    fn test_valid_config_passes() {
        let config = test_parse_config("[[nav]]\ntext = \"Home\"\nlink = \"/\"");
        assert!(validate_config(&args(false), &config).is_ok());
    }

    #[test]
    fn test_errors_fail_validation() {
        let config = broken_config();
        let result = validate_config(&args(false), &config);
        assert!(result.is_err());
        // The error carries the full diagnostic list
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("nav[0].link"));
    }

    #[test]
    fn test_warn_only_downgrades_errors() {
        let config = broken_config();
        assert!(validate_config(&args(true), &config).is_ok());
    }
}
