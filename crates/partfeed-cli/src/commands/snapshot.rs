use std::path::Path;

use anyhow::Result;

use partfeed_engine::snapshot;

/// Execute the `snapshot` command: stage a file and record a commit.
pub fn execute(file: &Path, message: &str) -> Result<()> {
    snapshot::snapshot_file(file, message)?;
    println!("Snapshot committed: {}", file.display());
    Ok(())
}
