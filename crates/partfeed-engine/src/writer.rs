//! Feed output and delta-file retirement.

use std::path::Path;

use crate::error::FeedError;
use crate::table::Table;

/// Write the enriched table to the feed path, truncating any previous feed.
/// An empty table still writes its header line, so downstream consumers
/// always see the column set.
pub fn write_feed(feed: &Table, path: &Path) -> Result<(), FeedError> {
    feed.write_to_path(path)
}

/// Delete the consumed delta file. Failure here surfaces as a cleanup
/// error: the feed is already on disk and the delta will be reprocessed on
/// the next run.
pub fn retire_delta(path: &Path) -> Result<(), FeedError> {
    std::fs::remove_file(path).map_err(|source| FeedError::Cleanup {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_retire_delta_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("delta_parts_1.csv");
        std::fs::write(&path, "part_number\nA1\n").unwrap();

        retire_delta(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_retire_missing_delta_is_cleanup_error() {
        let dir = tempdir().unwrap();
        let err = retire_delta(&dir.path().join("gone.csv")).unwrap_err();
        assert!(err.is_cleanup());
    }

    #[test]
    fn test_empty_feed_still_writes_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output_data_feed.csv");
        let feed = Table::new(vec![
            "part_number".into(),
            "name".into(),
            "category".into(),
        ]);

        write_feed(&feed, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "part_number,name,category\n");
    }
}
