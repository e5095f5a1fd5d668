//! Derives where the resource index and the hole table live.
//!
//! Version 1.x containers store the index offset in a 32-bit field at header
//! offset 40. Version 2.0 added a 64-bit field at offset 64 and stopped
//! maintaining the old one, so the field to trust depends on the format major
//! version.

use log::debug;

use crate::dbpf::types::error::{DbpfError, Result};
use crate::dbpf::types::models::{
    Header, IndexDescriptor, OffsetField, Version, INDEX_FLAGS_SIZE,
};

/// Returns the raw (unadjusted) index offset from the field selected for this header.
pub fn raw_index_offset(header: &Header) -> u64 {
    match OffsetField::for_format(header.format_major) {
        OffsetField::Legacy => u64::from(header.index_offset_v1),
        OffsetField::Modern => header.index_offset_v2,
    }
}

/// Describes the resource index.
///
/// The on-disk table begins with a 4-byte flags word that belongs to no entry,
/// so the reported offset skips it and the reported size excludes it.
pub fn resource_index(header: &Header) -> Result<IndexDescriptor> {
    let field = OffsetField::for_format(header.format_major);
    let raw_offset = raw_index_offset(header);

    let size = header.index_size.checked_sub(INDEX_FLAGS_SIZE).ok_or_else(|| {
        DbpfError::MalformedIndex(format!(
            "declared index size {} is smaller than its {}-byte flags word",
            header.index_size, INDEX_FLAGS_SIZE
        ))
    })?;
    let offset = raw_offset
        .checked_add(u64::from(INDEX_FLAGS_SIZE))
        .ok_or_else(|| {
            DbpfError::MalformedIndex(format!("index offset {:#x} overflows", raw_offset))
        })?;

    let descriptor = IndexDescriptor {
        version: Version::new(header.index_major_version, header.index_minor_version),
        count: header.index_entry_count,
        offset,
        size,
    };
    debug!(
        "Resource index ({:?} offset field): version={}, count={}, offset={:#x}, size={}",
        field, descriptor.version, descriptor.count, descriptor.offset, descriptor.size
    );
    Ok(descriptor)
}

/// Describes the hole table. Holes carry no version, so it is always `0.0`.
pub fn hole_index(header: &Header) -> IndexDescriptor {
    IndexDescriptor {
        version: Version::default(),
        count: header.hole_entry_count,
        offset: u64::from(header.hole_offset),
        size: header.hole_size,
    }
}
