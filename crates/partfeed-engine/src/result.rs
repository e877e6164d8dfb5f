//! Feed run outcome and report types.

use std::path::PathBuf;

/// Counts and paths from a completed feed run.
#[derive(Debug, Clone)]
pub struct FeedReport {
    /// The delta file that was consumed (and deleted).
    pub delta_file: PathBuf,
    /// Distinct usable part numbers in the delta set.
    pub delta_parts: usize,
    /// Part-master records scanned.
    pub records_scanned: usize,
    /// Records written to the feed.
    pub records_written: usize,
    /// Written records whose category lookup succeeded.
    pub categories_resolved: usize,
    /// Written records left with an empty category.
    pub categories_missing: usize,
    /// Path of the written feed file.
    pub output_path: PathBuf,
    pub duration_secs: f64,
}

/// Result of a feed run. The two no-work outcomes are clean exits, not
/// errors: nothing is written and nothing is deleted.
#[derive(Debug, Clone)]
pub enum FeedOutcome {
    /// No file in the delta directory matched the delta prefix.
    NoDeltaFile,
    /// A delta file was found but carried no usable part numbers. The file
    /// is left in place.
    EmptyDeltaSet { delta_file: PathBuf },
    /// Feed written and delta file deleted.
    Completed(FeedReport),
}

/// Status of one item in a layout check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Failed,
}

/// One checked item: a reference table or directory.
#[derive(Debug, Clone)]
pub struct ItemCheck {
    pub status: CheckStatus,
    pub message: String,
}

impl ItemCheck {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Ok,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Failed,
            message: message.into(),
        }
    }
}

/// Result of checking a feed's directory layout without running it.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub parts_table: ItemCheck,
    pub category_table: ItemCheck,
    pub delta_dir: ItemCheck,
}

impl CheckReport {
    /// True when every checked item passed.
    pub fn all_ok(&self) -> bool {
        [&self.parts_table, &self.category_table, &self.delta_dir]
            .iter()
            .all(|item| item.status == CheckStatus::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_report_all_ok_requires_every_item() {
        let report = CheckReport {
            parts_table: ItemCheck::ok("2 records"),
            category_table: ItemCheck::ok("1 record"),
            delta_dir: ItemCheck::ok("no pending files"),
        };
        assert!(report.all_ok());

        let report = CheckReport {
            category_table: ItemCheck::failed("missing 'category' column"),
            ..report
        };
        assert!(!report.all_ok());
    }
}
