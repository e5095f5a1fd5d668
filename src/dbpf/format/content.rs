//! # Record Extraction
//!
//! Turns one [`IndexEntry`] into a [`Record`] by seeking to the entry's
//! position and reading its declared decompressed size.
//!
//! The bytes are returned exactly as stored. When the entry is compressed the
//! read window is still `decompressed_size` long, which may cover more or
//! fewer bytes than the stored payload; `stored_size` travels on the record so
//! a decompressor can pick the right prefix.

use std::io::{Read, Seek, SeekFrom};

use log::{trace, warn};

use crate::dbpf::types::error::{DbpfError, Result};
use crate::dbpf::types::models::{IndexEntry, Record};
use crate::dbpf::utils;

/// Reads the payload window of `entry` from `source`.
pub fn extract_record<R: Read + Seek>(source: &mut R, entry: &IndexEntry) -> Result<Record> {
    let offset = u64::from(entry.position);
    let length = entry.decompressed_size;

    if !entry.is_compressed() && entry.size != length {
        warn!(
            "Uncompressed entry {} stores {} bytes but declares {} decompressed",
            entry.key(),
            entry.size,
            length
        );
    }

    source.seek(SeekFrom::Start(offset))?;
    let raw = utils::read_window(source, u64::from(length))?;
    if raw.len() != length as usize {
        return Err(DbpfError::TruncatedRecord {
            offset,
            expected: u64::from(length),
        });
    }

    trace!("Extracted {} ({} bytes at {:#x})", entry.key(), length, offset);

    Ok(Record {
        key: entry.key(),
        offset,
        length,
        stored_size: entry.size,
        compression_type: entry.compression_type,
        raw,
    })
}
