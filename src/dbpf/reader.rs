use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use log::{debug, info};

use super::format::{content, header, index};
use super::format::index::{holes, locator};
use super::iter::RecordIterator;
use super::types::error::Result;
use super::types::key::ResourceKey;
use super::types::models::*;
use super::types::options::ReaderOptions;

/// The main reader for DBPF containers.
///
/// The header is parsed once when the reader is created. Everything else
/// (index, holes, payloads) is read from the source on demand, with an
/// independent seek per request; nothing is cached between calls.
///
/// The reader owns its source value. To keep ownership of a file, pass
/// `&mut file`: a mutable reference to a `Read + Seek` type is itself
/// `Read + Seek`.
#[derive(Debug)]
pub struct DbpfReader<R> {
    source: R,
    header: Header,
    options: ReaderOptions,
}

impl DbpfReader<BufReader<File>> {
    /// Opens the container at `path` with default options.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened
    /// - File is shorter than a header
    /// - File does not start with the `DBPF` signature
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(path, ReaderOptions::default())
    }

    /// Opens the container at `path` with the given options.
    pub fn open_with_options(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening DBPF file: {}", path.display());
        let file = File::open(path)?;
        Self::with_options(BufReader::new(file), options)
    }
}

impl<R: Read + Seek> DbpfReader<R> {
    /// Parses the header of `source` with default options.
    pub fn new(source: R) -> Result<Self> {
        Self::with_options(source, ReaderOptions::default())
    }

    /// Parses the header of `source`, decoding later tables according to `options`.
    pub fn with_options(mut source: R, options: ReaderOptions) -> Result<Self> {
        let header = header::parse(&mut source)?;
        debug!("Accepted entry layouts: {:?}", options.layouts);
        Ok(Self {
            source,
            header,
            options,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Container format version, e.g. `2.1`.
    pub fn version(&self) -> Version {
        self.header.version()
    }

    pub fn user_version(&self) -> Version {
        self.header.user_version()
    }

    pub fn flags(&self) -> u32 {
        self.header.flags()
    }

    pub fn creation_time(&self) -> u32 {
        self.header.creation_time()
    }

    pub fn modification_time(&self) -> u32 {
        self.header.modification_time()
    }

    /// Describes the resource index: its version, entry count, and the
    /// offset and size of the entry area (flags word excluded).
    pub fn index(&self) -> Result<IndexDescriptor> {
        locator::resource_index(&self.header)
    }

    /// Describes the hole table.
    pub fn holes(&self) -> IndexDescriptor {
        locator::hole_index(&self.header)
    }

    /// Reads and decodes the resource index in on-disk order.
    pub fn index_entries(&mut self) -> Result<Vec<IndexEntry>> {
        let descriptor = self.index()?;
        index::read_entries(&mut self.source, &descriptor, &self.options.layouts)
    }

    /// Reads the resource index as raw entries of the inferred width.
    pub fn raw_index_entries(&mut self) -> Result<Vec<Vec<u8>>> {
        let descriptor = self.index()?;
        index::read_raw_entries(&mut self.source, &descriptor)
    }

    /// Reads the hole table.
    pub fn hole_entries(&mut self) -> Result<Vec<Hole>> {
        let descriptor = self.holes();
        holes::read_holes(&mut self.source, &descriptor)
    }

    /// Reads the payload of a single entry.
    pub fn read_record(&mut self, entry: &IndexEntry) -> Result<Record> {
        content::extract_record(&mut self.source, entry)
    }

    /// Returns a lazy iterator over every record, in index order.
    ///
    /// The index is read when this is called; each payload is read when the
    /// iterator reaches it. Call again to start over.
    pub fn records(&mut self) -> Result<RecordIterator<'_, R>> {
        let entries = self.index_entries()?;
        Ok(RecordIterator::new(&mut self.source, entries))
    }

    /// Reads the first record filed under `key`, if the index lists one.
    pub fn find(&mut self, key: &ResourceKey) -> Result<Option<Record>> {
        let entries = self.index_entries()?;
        match entries.iter().find(|entry| entry.key() == *key) {
            Some(entry) => self.read_record(entry).map(Some),
            None => Ok(None),
        }
    }

    /// Gives the source back to the caller.
    pub fn into_inner(self) -> R {
        self.source
    }
}
