use std::path::Path;

use anyhow::{Context, Result};

use partfeed_engine::config::{parser, validator};
use partfeed_engine::orchestrator;
use partfeed_engine::{FeedOutcome, FeedReport};

/// Execute the `run` command: parse, validate, and run a feed.
pub fn execute(config_path: &Path) -> Result<()> {
    // 1. Parse feed YAML
    let config = parser::parse_feed(config_path)
        .with_context(|| format!("Failed to parse feed config: {}", config_path.display()))?;

    // 2. Validate
    validator::validate_feed(&config)?;

    tracing::info!(
        feed = config.feed,
        source_dir = %config.source_dir.display(),
        delta_dir = %config.delta_dir.display(),
        "Feed configuration validated"
    );

    // 3. Run
    match orchestrator::run_feed(&config)? {
        FeedOutcome::NoDeltaFile => {
            println!("No delta part number file found. Nothing to do.");
        }
        FeedOutcome::EmptyDeltaSet { delta_file } => {
            println!(
                "No part numbers found in delta file {}. Nothing to do.",
                delta_file.display()
            );
        }
        FeedOutcome::Completed(report) => print_report(&config.feed, &report),
    }

    Ok(())
}

fn print_report(feed: &str, report: &FeedReport) {
    println!("Feed '{}' completed successfully.", feed);
    println!("  Delta file:          {}", report.delta_file.display());
    println!("  Delta part numbers:  {}", report.delta_parts);
    println!("  Records scanned:     {}", report.records_scanned);
    println!("  Records written:     {}", report.records_written);
    println!("  Categories resolved: {}", report.categories_resolved);
    if report.categories_missing > 0 {
        println!("  Categories missing:  {}", report.categories_missing);
    }
    println!("  Output:              {}", report.output_path.display());
    println!("  Duration:            {:.3}s", report.duration_secs);

    // Machine-readable JSON for surrounding tooling
    let json = serde_json::json!({
        "feed": feed,
        "delta_file": report.delta_file,
        "delta_parts": report.delta_parts,
        "records_scanned": report.records_scanned,
        "records_written": report.records_written,
        "categories_resolved": report.categories_resolved,
        "categories_missing": report.categories_missing,
        "output_path": report.output_path,
        "duration_secs": report.duration_secs,
    });
    println!("@@FEED_JSON@@{}", json);
}
