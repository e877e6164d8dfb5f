//! Configuration types for a feed definition.

use std::path::PathBuf;

use serde::Deserialize;

/// Default name of the output feed file, written into the source directory.
pub const DEFAULT_FEED_FILENAME: &str = "output_data_feed.csv";
/// Default filename prefix that marks a file in the delta directory as a
/// pending delta.
pub const DEFAULT_DELTA_PREFIX: &str = "delta_parts_";

fn default_feed_filename() -> String {
    DEFAULT_FEED_FILENAME.to_string()
}

fn default_delta_prefix() -> String {
    DEFAULT_DELTA_PREFIX.to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

/// A parsed feed definition.
///
/// Directory locations and the output filename live here so the engine can
/// be pointed at temporary directories in tests; the reference-table
/// filenames and column names are fixed by the feed contract and are
/// constants in the orchestrator and join modules.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Config schema version; only "1.0" is supported.
    #[serde(default = "default_version")]
    pub version: String,
    /// Feed name, used in logs and summaries.
    pub feed: String,
    /// Directory holding `parts.csv` and `category_association.csv`; the
    /// output feed is written here too.
    pub source_dir: PathBuf,
    /// Directory scanned for pending delta files.
    pub delta_dir: PathBuf,
    /// Output filename within `source_dir`.
    #[serde(default = "default_feed_filename")]
    pub feed_filename: String,
    /// Filename prefix identifying delta files.
    #[serde(default = "default_delta_prefix")]
    pub delta_prefix: String,
}
