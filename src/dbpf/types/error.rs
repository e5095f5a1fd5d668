//! Failure kinds reported while decoding a container.

use thiserror::Error;

/// Every way reading a container can fail. Each decode step maps its failure
/// to its own variant so a bad header, a bad index and a short payload differ.
#[derive(Debug, Error)]
pub enum DbpfError {
    /// The source itself failed (not an end-of-data condition).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the `DBPF` signature.
    #[error("Invalid format: expected magic \"DBPF\", found {found:02x?}")]
    InvalidFormat { found: [u8; 4] },

    /// The header describes an index table whose offset or size cannot be valid.
    #[error("Malformed index: {0}")]
    MalformedIndex(String),

    /// The index declares zero entries, so no entry width can be inferred.
    #[error("Index declares no entries; entry width is undefined")]
    EmptyIndex,

    /// The index size is not a whole multiple of its entry count.
    #[error("Irregular index: {size} bytes cannot hold {count} entries of equal width")]
    IrregularIndex { size: u32, count: u32 },

    /// The inferred entry width matches none of the accepted entry layouts.
    #[error("Unsupported index entry width: {width} bytes")]
    UnsupportedEntryWidth { width: u32 },

    /// A resource payload extends past the end of the source.
    #[error("Truncated record: {expected} bytes at offset {offset} run past the end of the source")]
    TruncatedRecord { offset: u64, expected: u64 },

    /// A structural read (header, index or hole table) ran out of bytes.
    #[error("Unexpected end of source while reading {context}: wanted {expected} bytes at offset {offset}")]
    EndOfSource {
        context: &'static str,
        offset: u64,
        expected: u64,
    },
}

/// `Result` specialised to [`DbpfError`].
pub type Result<T> = std::result::Result<T, DbpfError>;
