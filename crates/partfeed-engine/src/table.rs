//! In-memory tables loaded from header-first CSV files.
//!
//! A [`Table`] is an ordered header plus an ordered sequence of records,
//! every record exactly as wide as the header. Column sets are whatever the
//! source file declares; nothing here is schema-aware beyond that.

use std::fs::File;
use std::path::Path;

use crate::error::FeedError;

/// An ordered header and the records under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    records: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given header.
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            records: Vec::new(),
        }
    }

    /// Read a comma-separated UTF-8 file, first line as the header.
    ///
    /// A header-only file yields an empty table. Ragged rows propagate the
    /// parser's error as [`FeedError::Format`]; a missing or unreadable
    /// path is [`FeedError::FileAccess`].
    pub fn read_from_path(path: &Path) -> Result<Self, FeedError> {
        let file = File::open(path).map_err(|source| FeedError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let header = reader
            .headers()
            .map_err(|e| csv_error(path, e))?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| csv_error(path, e))?;
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { header, records })
    }

    /// Write the table out, header first, truncating any existing file.
    pub fn write_to_path(&self, path: &Path) -> Result<(), FeedError> {
        let file = File::create(path).map_err(|source| FeedError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = csv::Writer::from_writer(file);

        writer
            .write_record(&self.header)
            .map_err(|e| csv_error(path, e))?;
        for record in &self.records {
            writer.write_record(record).map_err(|e| csv_error(path, e))?;
        }
        writer.flush().map_err(|source| FeedError::FileAccess {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Append a record. The record must match the header width; callers
    /// constructing tables by hand own that invariant.
    pub fn push_record(&mut self, record: Vec<String>) {
        debug_assert_eq!(record.len(), self.header.len());
        self.records.push(record);
    }
}

/// Map a `csv` crate error onto the feed taxonomy: I/O failures are access
/// errors, everything else is malformed content.
fn csv_error(path: &Path, err: csv::Error) -> FeedError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(source) => FeedError::FileAccess {
                path: path.to_path_buf(),
                source,
            },
            // is_io_error() guarantees the Io kind
            _ => unreachable!(),
        }
    } else {
        FeedError::Format {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
