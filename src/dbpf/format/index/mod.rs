//! # Index Table Parsing
//!
//! Entry point for reading the resource index. The index header fields are
//! turned into an [`IndexDescriptor`] by [`locator`]; this module infers the
//! entry width from that descriptor, picks a [`layout::EntryLayout`] for it and
//! decodes the entries in on-disk order.

use std::io::{Read, Seek};

use log::{debug, info, trace};

use crate::dbpf::types::error::{DbpfError, Result};
use crate::dbpf::types::models::{IndexDescriptor, IndexEntry};
use crate::dbpf::utils;
use self::layout::EntryLayout;

pub mod holes;
pub mod layout;
pub mod locator;

/// Selects the layout for `descriptor` among `accepted` by inferred entry width.
pub fn select_layout(descriptor: &IndexDescriptor, accepted: &[EntryLayout]) -> Result<EntryLayout> {
    let width = utils::entry_width(descriptor.size, descriptor.count)?;
    let layout = EntryLayout::for_width(width, accepted)
        .ok_or(DbpfError::UnsupportedEntryWidth { width })?;
    debug!("Index entry width {} bytes -> {} layout", width, layout);
    Ok(layout)
}

/// Reads and decodes every entry described by `descriptor`.
pub fn read_entries<R: Read + Seek>(
    source: &mut R,
    descriptor: &IndexDescriptor,
    accepted: &[EntryLayout],
) -> Result<Vec<IndexEntry>> {
    let layout = select_layout(descriptor, accepted)?;
    info!(
        "Reading {} index entries ({} layout) at {:#x}",
        descriptor.count, layout, descriptor.offset
    );

    let table = utils::read_block_at(
        source,
        descriptor.offset,
        descriptor.size as usize,
        "index table",
    )?;

    let mut reader = table.as_slice();
    let mut entries = Vec::with_capacity(descriptor.count as usize);
    while !reader.is_empty() {
        let entry = layout.decode(&mut reader)?;
        trace!(
            "Entry {}: key={}, position={:#x}, size={}, decompressed={}, compression={:#06x}",
            entries.len(),
            entry.key(),
            entry.position,
            entry.size,
            entry.decompressed_size,
            entry.compression_type
        );
        entries.push(entry);
    }

    Ok(entries)
}

/// Reads every entry described by `descriptor` as raw bytes of the inferred width.
///
/// No field mapping is applied, so this works for entry widths that
/// [`EntryLayout`] does not know.
pub fn read_raw_entries<R: Read + Seek>(
    source: &mut R,
    descriptor: &IndexDescriptor,
) -> Result<Vec<Vec<u8>>> {
    let width = utils::entry_width(descriptor.size, descriptor.count)?;
    info!(
        "Reading {} raw index entries of {} bytes at {:#x}",
        descriptor.count, width, descriptor.offset
    );

    let table = utils::read_block_at(
        source,
        descriptor.offset,
        descriptor.size as usize,
        "index table",
    )?;

    Ok(table
        .chunks_exact(width as usize)
        .map(<[u8]>::to_vec)
        .collect())
}
