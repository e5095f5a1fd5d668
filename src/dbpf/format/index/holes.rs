//! Hole table parsing.
//!
//! Each hole is an `(offset, size)` pair of little-endian u32 values marking a
//! free range inside the container. Holes are listed as stored; they are not
//! checked against the index or against each other.

use std::io::{Read, Seek};

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace};

use crate::dbpf::types::error::{DbpfError, Result};
use crate::dbpf::types::models::{Hole, IndexDescriptor};
use crate::dbpf::utils;

/// Byte width of one hole entry.
pub const HOLE_WIDTH: u32 = 8;

/// Reads the hole table. A table with no entries yields an empty list.
pub fn read_holes<R: Read + Seek>(source: &mut R, descriptor: &IndexDescriptor) -> Result<Vec<Hole>> {
    if descriptor.count == 0 {
        debug!("Container has no holes");
        return Ok(Vec::new());
    }

    let width = utils::entry_width(descriptor.size, descriptor.count)?;
    if width != HOLE_WIDTH {
        return Err(DbpfError::UnsupportedEntryWidth { width });
    }

    let table = utils::read_block_at(
        source,
        descriptor.offset,
        descriptor.size as usize,
        "hole table",
    )?;

    let mut reader = table.as_slice();
    let mut holes = Vec::with_capacity(descriptor.count as usize);
    while !reader.is_empty() {
        let hole = Hole {
            offset: reader.read_u32::<LittleEndian>()?,
            size: reader.read_u32::<LittleEndian>()?,
        };
        trace!("Hole {}: offset={:#x}, size={}", holes.len(), hole.offset, hole.size);
        holes.push(hole);
    }

    debug!("Read {} holes", holes.len());
    Ok(holes)
}
