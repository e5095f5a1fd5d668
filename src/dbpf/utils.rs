//! Shared seek/read helpers and table width arithmetic.

use std::io::{Read, Seek, SeekFrom};

use super::types::error::{DbpfError, Result};

/// Read up to `len` bytes from the current position.
///
/// The buffer grows with the data actually read, so a corrupt length field
/// costs no more memory than the source holds.
pub fn read_window<R: Read>(reader: &mut R, len: u64) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.by_ref().take(len).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Seek to `offset` and read exactly `len` bytes.
///
/// Running out of bytes is reported as [`DbpfError::EndOfSource`] tagged with
/// `context`, so a short header and a short index table are told apart.
pub fn read_block_at<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    len: usize,
    context: &'static str,
) -> Result<Vec<u8>> {
    reader.seek(SeekFrom::Start(offset))?;
    let buf = read_window(reader, len as u64)?;
    if buf.len() != len {
        return Err(DbpfError::EndOfSource {
            context,
            offset,
            expected: len as u64,
        });
    }
    Ok(buf)
}

/// Infer the width of one table entry from the table's byte size and entry count.
pub fn entry_width(size: u32, count: u32) -> Result<u32> {
    if count == 0 {
        return Err(DbpfError::EmptyIndex);
    }
    if size == 0 {
        return Err(DbpfError::MalformedIndex(format!(
            "{} entries declared in a table with no entry bytes",
            count
        )));
    }
    if size % count != 0 {
        return Err(DbpfError::IrregularIndex { size, count });
    }
    Ok(size / count)
}
