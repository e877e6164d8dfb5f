//! Feed YAML parsing with environment variable substitution.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::types::FeedConfig;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid env var regex"));

/// Substitute `${VAR_NAME}` patterns with environment variable values.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set.
pub fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = input.to_string();
    let mut missing = Vec::new();

    for cap in ENV_VAR_RE.captures_iter(input) {
        let var_name = &cap[1];
        match std::env::var(var_name) {
            Ok(val) => {
                result = result.replace(&cap[0], &val);
            }
            Err(_) => {
                missing.push(var_name.to_string());
            }
        }
    }

    if !missing.is_empty() {
        anyhow::bail!("Missing environment variable(s): {}", missing.join(", "));
    }

    Ok(result)
}

/// Parse a feed YAML string (after env var substitution).
pub fn parse_feed_str(yaml_str: &str) -> Result<FeedConfig> {
    let substituted = substitute_env_vars(yaml_str)?;
    let config: FeedConfig =
        serde_yaml::from_str(&substituted).context("Failed to parse feed YAML")?;
    Ok(config)
}

/// Parse a feed YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is unset, or the YAML is invalid.
pub fn parse_feed(path: &Path) -> Result<FeedConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed config: {}", path.display()))?;
    parse_feed_str(&content)
}
