//! Feed orchestrator: locates the delta file, loads the tables, runs the
//! join, writes the feed, and retires the delta.
//!
//! The run is a single synchronous sequence. Each stage either advances the
//! state machine or propagates a [`FeedError`] to the caller; no stage is
//! retried and nothing rolls back a feed that was already written.

use std::path::Path;
use std::time::Instant;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::result::{CheckReport, FeedOutcome, FeedReport, ItemCheck};
use crate::table::Table;
use crate::{join, locator, writer};

/// Part master filename within the source directory.
pub const PARTS_FILENAME: &str = "parts.csv";
/// Category association filename within the source directory.
pub const CATEGORY_ASSOCIATION_FILENAME: &str = "category_association.csv";

/// Run the feed pipeline once.
///
/// `LOCATE → READ_DELTA → LOAD_TABLES → JOIN → WRITE → DELETE`, with the
/// two no-work short-circuits reported as clean [`FeedOutcome`] variants.
pub fn run_feed(config: &FeedConfig) -> Result<FeedOutcome, FeedError> {
    let started = Instant::now();

    let Some(delta_file) = locator::find_latest_delta(&config.delta_dir, &config.delta_prefix)?
    else {
        tracing::info!("No delta part number file found");
        return Ok(FeedOutcome::NoDeltaFile);
    };
    tracing::info!(file = %delta_file.display(), "Processing delta file");

    let delta_table = Table::read_from_path(&delta_file)?;
    let delta = join::delta_set(&delta_table);
    if delta.is_empty() {
        tracing::info!(file = %delta_file.display(), "No part numbers found in delta file");
        return Ok(FeedOutcome::EmptyDeltaSet { delta_file });
    }

    let parts_path = config.source_dir.join(PARTS_FILENAME);
    let parts = Table::read_from_path(&parts_path)?;
    require_column(&parts, &parts_path, join::KEY_COLUMN)?;

    let assoc_path = config.source_dir.join(CATEGORY_ASSOCIATION_FILENAME);
    let assoc = Table::read_from_path(&assoc_path)?;
    require_column(&assoc, &assoc_path, join::KEY_COLUMN)?;
    require_column(&assoc, &assoc_path, join::CATEGORY_COLUMN)?;

    let feed = join::build_feed(&parts, &assoc, &delta);

    let output_path = config.source_dir.join(&config.feed_filename);
    writer::write_feed(&feed, &output_path)?;
    tracing::info!(
        file = %output_path.display(),
        records = feed.len(),
        "Wrote data feed file"
    );

    writer::retire_delta(&delta_file)?;
    tracing::info!(file = %delta_file.display(), "Deleted processed delta file");

    let categories_resolved = resolved_count(&feed);
    Ok(FeedOutcome::Completed(FeedReport {
        delta_parts: delta.len(),
        records_scanned: parts.len(),
        records_written: feed.len(),
        categories_resolved,
        categories_missing: feed.len() - categories_resolved,
        delta_file,
        output_path,
        duration_secs: started.elapsed().as_secs_f64(),
    }))
}

/// Check the feed's directory layout without consuming anything.
pub fn check_feed(config: &FeedConfig) -> CheckReport {
    CheckReport {
        parts_table: check_table(
            &config.source_dir.join(PARTS_FILENAME),
            &[join::KEY_COLUMN],
        ),
        category_table: check_table(
            &config.source_dir.join(CATEGORY_ASSOCIATION_FILENAME),
            &[join::KEY_COLUMN, join::CATEGORY_COLUMN],
        ),
        delta_dir: check_delta_dir(&config.delta_dir, &config.delta_prefix),
    }
}

fn require_column(table: &Table, path: &Path, column: &str) -> Result<(), FeedError> {
    if table.column_index(column).is_none() {
        return Err(FeedError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        });
    }
    Ok(())
}

fn resolved_count(feed: &Table) -> usize {
    let Some(cat) = feed.column_index(join::CATEGORY_COLUMN) else {
        return 0;
    };
    feed.records()
        .iter()
        .filter(|record| !record[cat].is_empty())
        .count()
}

fn check_table(path: &Path, required_columns: &[&str]) -> ItemCheck {
    let table = match Table::read_from_path(path) {
        Ok(table) => table,
        Err(err) => return ItemCheck::failed(err.to_string()),
    };
    for column in required_columns {
        if table.column_index(column).is_none() {
            return ItemCheck::failed(format!(
                "{} has no '{}' column",
                path.display(),
                column
            ));
        }
    }
    ItemCheck::ok(format!("{} record(s)", table.len()))
}

fn check_delta_dir(delta_dir: &Path, prefix: &str) -> ItemCheck {
    match locator::find_latest_delta(delta_dir, prefix) {
        Ok(Some(path)) => ItemCheck::ok(format!("pending: {}", path.display())),
        Ok(None) => ItemCheck::ok("no pending delta files"),
        Err(err) => ItemCheck::failed(err.to_string()),
    }
}
