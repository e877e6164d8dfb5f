//! Version-control snapshot of the written feed.
//!
//! Offered to the surrounding system after a successful run; the pipeline
//! itself never calls this.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Stage `path` and record a git commit with `message`, in the current
/// working directory's repository.
pub fn snapshot_file(path: &Path, message: &str) -> Result<()> {
    run_git(&[OsStr::new("add"), path.as_os_str()])?;
    run_git(&[OsStr::new("commit"), OsStr::new("-m"), OsStr::new(message)])?;
    tracing::info!(file = %path.display(), "Recorded feed snapshot commit");
    Ok(())
}

fn run_git(args: &[&OsStr]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .output()
        .context("Failed to invoke git")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "git {} failed ({}): {}",
            args.first()
                .map(|a| a.to_string_lossy().into_owned())
                .unwrap_or_default(),
            output.status,
            stderr.trim()
        );
    }
    Ok(())
}
