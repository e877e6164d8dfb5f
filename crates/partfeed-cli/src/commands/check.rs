use std::path::Path;

use anyhow::{Context, Result};

use partfeed_engine::config::{parser, validator};
use partfeed_engine::orchestrator;
use partfeed_engine::result::{CheckStatus, ItemCheck};

/// Execute the `check` command: validate configuration and directory layout.
pub fn execute(config_path: &Path) -> Result<()> {
    // 1. Parse feed YAML
    let config = parser::parse_feed(config_path)
        .with_context(|| format!("Failed to parse feed config: {}", config_path.display()))?;

    // 2. Validate configuration values
    validator::validate_feed(&config)?;
    println!("Feed configuration: OK");

    // 3. Check the directory layout
    let report = orchestrator::check_feed(&config);
    print_item("Part master", &report.parts_table);
    print_item("Category table", &report.category_table);
    print_item("Delta directory", &report.delta_dir);

    if report.all_ok() {
        println!("\nAll checks passed.");
        Ok(())
    } else {
        anyhow::bail!("One or more checks failed")
    }
}

fn print_item(label: &str, item: &ItemCheck) {
    let status = match item.status {
        CheckStatus::Ok => "OK",
        CheckStatus::Failed => "FAILED",
    };
    println!("{:18} {}", format!("{}:", label), status);
    if !item.message.is_empty() {
        println!("  {}", item.message);
    }
}
