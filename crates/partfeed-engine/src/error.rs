//! Feed error model: categorized failures for the batch pipeline.

use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// FeedError — categorised errors surfaced by the pipeline stages
// ---------------------------------------------------------------------------

/// Categorized error raised by a feed run.
///
/// `FileAccess` covers missing or unreadable inputs and failed output
/// writes. `Format` wraps the CSV parser's own error for malformed
/// delimited content; no repair is attempted. `MissingColumn` is the
/// single schema check the pipeline performs: a reference table without
/// its required key column. `Cleanup` is the post-write deletion of the
/// consumed delta file failing, which leaves the feed written but the
/// delta still pending.
#[derive(Debug)]
pub enum FeedError {
    /// Input file or directory missing/unreadable, or output unwritable.
    FileAccess { path: PathBuf, source: io::Error },
    /// Malformed delimited content, as reported by the CSV parser.
    Format { path: PathBuf, source: csv::Error },
    /// A reference table lacks a required column.
    MissingColumn { path: PathBuf, column: String },
    /// Deleting the consumed delta file failed after the feed was written.
    Cleanup { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileAccess { path, source } => {
                write!(f, "cannot access {}: {}", path.display(), source)
            }
            Self::Format { path, source } => {
                write!(f, "malformed table {}: {}", path.display(), source)
            }
            Self::MissingColumn { path, column } => {
                write!(f, "table {} has no '{}' column", path.display(), column)
            }
            Self::Cleanup { path, source } => {
                write!(
                    f,
                    "failed to delete processed delta file {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } | Self::Cleanup { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
            Self::MissingColumn { .. } => None,
        }
    }
}

impl FeedError {
    /// Returns `true` for the post-write cleanup failure, the one error
    /// that leaves a partially-advanced state behind (feed written, delta
    /// file still present). Rerunning the job overwrites the feed, so the
    /// recovery path is simply to run again.
    pub fn is_cleanup(&self) -> bool {
        matches!(self, Self::Cleanup { .. })
    }

    /// The file or directory the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileAccess { path, .. }
            | Self::Format { path, .. }
            | Self::MissingColumn { path, .. }
            | Self::Cleanup { path, .. } => path,
        }
    }
}
