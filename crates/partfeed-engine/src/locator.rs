//! Locates the newest pending delta file in the delta directory.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::FeedError;

/// Find the most recently created delta file under `delta_dir` whose name
/// starts with `prefix` and ends with `.csv`.
///
/// `Ok(None)` means no pending work. Selection uses the file-creation
/// timestamp, falling back to the modification timestamp on filesystems
/// that do not record creation time. Ties are implementation-defined.
pub fn find_latest_delta(delta_dir: &Path, prefix: &str) -> Result<Option<PathBuf>, FeedError> {
    let entries = std::fs::read_dir(delta_dir).map_err(|source| FeedError::FileAccess {
        path: delta_dir.to_path_buf(),
        source,
    })?;

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry.map_err(|source| FeedError::FileAccess {
            path: delta_dir.to_path_buf(),
            source,
        })?;

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(prefix) || !name.ends_with(".csv") {
            continue;
        }

        let metadata = entry.metadata().map_err(|source| FeedError::FileAccess {
            path: entry.path(),
            source,
        })?;
        if !metadata.is_file() {
            continue;
        }

        let created = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map_err(|source| FeedError::FileAccess {
                path: entry.path(),
                source,
            })?;

        let newer = match &latest {
            Some((best, _)) => created > *best,
            None => true,
        };
        if newer {
            latest = Some((created, entry.path()));
        }
    }

    Ok(latest.map(|(_, path)| path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write as _;
    use std::thread::sleep;
    use std::time::Duration;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        let mut f = File::create(path).unwrap();
        f.write_all(b"part_number\n").unwrap();
    }

    #[test]
    fn test_empty_directory_is_no_work() {
        let dir = tempdir().unwrap();
        let found = find_latest_delta(dir.path(), "delta_parts_").unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_missing_directory_is_file_access_error() {
        let dir = tempdir().unwrap();
        let err = find_latest_delta(&dir.path().join("absent"), "delta_parts_").unwrap_err();
        assert!(matches!(err, FeedError::FileAccess { .. }), "got {err}");
    }

    #[test]
    fn test_ignores_non_matching_names() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("parts.csv"));
        touch(&dir.path().join("delta_parts_1.txt"));
        touch(&dir.path().join("other_delta_parts_1.csv"));

        let found = find_latest_delta(dir.path(), "delta_parts_").unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_latest_created_file_wins() {
        let dir = tempdir().unwrap();
        let older = dir.path().join("delta_parts_20240101.csv");
        let newer = dir.path().join("delta_parts_20240102.csv");
        touch(&older);
        // Creation-time resolution is coarse on some filesystems.
        sleep(Duration::from_millis(50));
        touch(&newer);

        let found = find_latest_delta(dir.path(), "delta_parts_").unwrap();
        assert_eq!(found, Some(newer));
    }

    #[test]
    fn test_single_match_returned() {
        let dir = tempdir().unwrap();
        let only = dir.path().join("delta_parts_a.csv");
        touch(&only);

        let found = find_latest_delta(dir.path(), "delta_parts_").unwrap();
        assert_eq!(found, Some(only));
    }
}
