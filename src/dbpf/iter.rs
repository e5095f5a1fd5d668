//! Lazy record enumeration.
//!
//! # Example
//! ```no_run
//! # use dbpf_reader::DbpfReader;
//! # let mut reader = DbpfReader::open("ui.package").unwrap();
//! for result in reader.records().unwrap() {
//!     let record = result.unwrap();
//!     println!("{}: {} bytes", record.key, record.length);
//! }
//! ```

use std::io::{Read, Seek};
use std::vec::IntoIter;

use super::format::content;
use super::types::error::Result;
use super::types::models::{IndexEntry, Record};

/// Iterator over the records of a container.
///
/// Holds the decoded index and reads one payload per call to `next`, so at
/// most one record buffer is alive at a time unless the caller keeps them.
/// A failed extraction is yielded as an error and the iterator moves on to
/// the next entry.
///
/// Created by [`DbpfReader::records()`](crate::DbpfReader::records).
pub struct RecordIterator<'a, R> {
    source: &'a mut R,
    entries: IntoIter<IndexEntry>,
}

impl<'a, R: Read + Seek> RecordIterator<'a, R> {
    pub(super) fn new(source: &'a mut R, entries: Vec<IndexEntry>) -> Self {
        Self {
            source,
            entries: entries.into_iter(),
        }
    }
}

impl<'a, R: Read + Seek> Iterator for RecordIterator<'a, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some(content::extract_record(&mut *self.source, &entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, R: Read + Seek> ExactSizeIterator for RecordIterator<'a, R> {}
