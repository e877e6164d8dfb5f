//! Semantic validation for parsed feed configuration values.

use anyhow::{bail, Result};

use crate::config::types::FeedConfig;

/// Validate a parsed feed configuration.
///
/// # Errors
///
/// Returns an error listing all validation failures found in the config.
pub fn validate_feed(config: &FeedConfig) -> Result<()> {
    let mut errors = Vec::new();

    if config.version != "1.0" {
        errors.push(format!(
            "Unsupported feed config version '{}', expected '1.0'",
            config.version
        ));
    }

    if config.feed.trim().is_empty() {
        errors.push("Feed name must not be empty".to_string());
    }

    if config.source_dir.as_os_str().is_empty() {
        errors.push("source_dir must not be empty".to_string());
    }

    if config.delta_dir.as_os_str().is_empty() {
        errors.push("delta_dir must not be empty".to_string());
    }

    if config.feed_filename.trim().is_empty() {
        errors.push("feed_filename must not be empty".to_string());
    } else if config.feed_filename.contains('/') || config.feed_filename.contains('\\') {
        errors.push(format!(
            "feed_filename '{}' must be a plain filename, not a path",
            config.feed_filename
        ));
    }

    if config.delta_prefix.is_empty() {
        errors.push("delta_prefix must not be empty".to_string());
    }

    if !errors.is_empty() {
        bail!("Invalid feed configuration:\n  - {}", errors.join("\n  - "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn valid_config() -> FeedConfig {
        FeedConfig {
            version: "1.0".to_string(),
            feed: "nightly_parts".to_string(),
            source_dir: PathBuf::from("/data/source"),
            delta_dir: PathBuf::from("/data/deltas"),
            feed_filename: "output_data_feed.csv".to_string(),
            delta_prefix: "delta_parts_".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        validate_feed(&valid_config()).unwrap();
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut config = valid_config();
        config.version = "2.0".to_string();
        let err = validate_feed(&config).unwrap_err().to_string();
        assert!(err.contains("Unsupported feed config version"));
    }

    #[test]
    fn test_feed_filename_with_path_rejected() {
        let mut config = valid_config();
        config.feed_filename = "../escape.csv".to_string();
        let err = validate_feed(&config).unwrap_err().to_string();
        assert!(err.contains("plain filename"));
    }

    #[test]
    fn test_all_errors_accumulated() {
        let mut config = valid_config();
        config.feed = String::new();
        config.delta_prefix = String::new();
        config.version = "0.9".to_string();
        let err = validate_feed(&config).unwrap_err().to_string();
        assert!(err.contains("Feed name"));
        assert!(err.contains("delta_prefix"));
        assert!(err.contains("version"));
    }
}
