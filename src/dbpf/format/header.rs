//! DBPF header decoding.
//!
//! The header is a fixed 96-byte little-endian block at the start of the file:
//!
//! ```text
//! [ 0..4 ]  magic "DBPF"
//! [ 4..12]  format major, minor
//! [12..20]  user major, minor
//! [20..24]  flags (unused)
//! [24..32]  creation time, modification time
//! [32..36]  index major version
//! [36..40]  index entry count
//! [40..44]  index offset (1.x)
//! [44..48]  index size
//! [48..60]  hole count, hole offset, hole size
//! [60..64]  index minor version
//! [64..72]  index offset (2.x, u64)
//! [72..96]  reserved
//! ```

use std::io::{Read, Seek};

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, info, trace, warn};

use crate::dbpf::types::error::{DbpfError, Result};
use crate::dbpf::types::models::{Header, HEADER_SIZE, MAGIC};
use crate::dbpf::utils;

/// Parses the header from the beginning of `source`.
///
/// The signature is checked before any other field is decoded; a file that
/// does not start with `DBPF` yields [`DbpfError::InvalidFormat`] and no header.
pub fn parse<R: Read + Seek>(source: &mut R) -> Result<Header> {
    info!("Parsing DBPF header");

    let block = utils::read_block_at(source, 0, HEADER_SIZE, "header")?;
    let header = decode(&block)?;

    if header.reserved.iter().any(|&b| b != 0) {
        warn!("Header reserved area is not zeroed");
    }

    info!(
        "Header parsed: version={}, user_version={}, index={} entries ({} bytes)",
        header.version(),
        header.user_version(),
        header.index_entry_count,
        header.index_size
    );
    Ok(header)
}

/// Decodes a header from an in-memory block of at least [`HEADER_SIZE`] bytes.
pub fn decode(block: &[u8]) -> Result<Header> {
    if block.len() < HEADER_SIZE {
        return Err(DbpfError::EndOfSource {
            context: "header",
            offset: 0,
            expected: HEADER_SIZE as u64,
        });
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&block[..4]);
    if magic != MAGIC {
        debug!("Rejecting source with magic {:02x?}", magic);
        return Err(DbpfError::InvalidFormat { found: magic });
    }

    let mut reader = &block[4..HEADER_SIZE];
    let format_major = reader.read_u32::<LittleEndian>()?;
    let format_minor = reader.read_u32::<LittleEndian>()?;
    let user_major = reader.read_u32::<LittleEndian>()?;
    let user_minor = reader.read_u32::<LittleEndian>()?;
    let flags = reader.read_u32::<LittleEndian>()?;
    let creation_time = reader.read_u32::<LittleEndian>()?;
    let modification_time = reader.read_u32::<LittleEndian>()?;
    let index_major_version = reader.read_u32::<LittleEndian>()?;
    let index_entry_count = reader.read_u32::<LittleEndian>()?;
    let index_offset_v1 = reader.read_u32::<LittleEndian>()?;
    let index_size = reader.read_u32::<LittleEndian>()?;
    let hole_entry_count = reader.read_u32::<LittleEndian>()?;
    let hole_offset = reader.read_u32::<LittleEndian>()?;
    let hole_size = reader.read_u32::<LittleEndian>()?;
    let index_minor_version = reader.read_u32::<LittleEndian>()?;
    let index_offset_v2 = reader.read_u64::<LittleEndian>()?;
    let mut reserved = [0u8; 24];
    reader.read_exact(&mut reserved)?;

    trace!(
        "Header offsets: v1={:#x}, v2={:#x}, holes={:#x}",
        index_offset_v1,
        index_offset_v2,
        hole_offset
    );

    Ok(Header {
        magic,
        format_major,
        format_minor,
        user_major,
        user_minor,
        flags,
        creation_time,
        modification_time,
        index_major_version,
        index_entry_count,
        index_offset_v1,
        index_size,
        hole_entry_count,
        hole_offset,
        hole_size,
        index_minor_version,
        index_offset_v2,
        reserved,
    })
}
