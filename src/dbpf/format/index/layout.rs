//! Known index entry layouts.
//!
//! The index header only says how many entries there are and how many bytes
//! they occupy together; the width of one entry, and therefore its field
//! mapping, is inferred from those two numbers. Each variant below is one
//! width the format is known to use. A width outside this set is rejected
//! instead of being decoded with a guessed mapping.
//!
//! ```text
//! Canonical        (32) type group inst_hi inst_lo pos size dsize comp:u16 committed:u16
//! NoInstanceHigh   (28) type group         inst_lo pos size dsize comp:u16 committed:u16
//! LegacyResourceId (24) type group inst    res_id  pos size
//! Legacy           (20) type group inst            pos size
//! ```

use byteorder::{LittleEndian, ReadBytesExt};

use crate::dbpf::types::error::Result;
use crate::dbpf::types::models::IndexEntry;

/// Committed flag reported for legacy entries, which carry none.
const LEGACY_COMMITTED: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryLayout {
    /// Nine fields, 32 bytes.
    Canonical,
    /// Canonical without the high instance half, 28 bytes.
    NoInstanceHigh,
    /// 1.x index with a resource id after the instance, 24 bytes.
    LegacyResourceId,
    /// 1.x index, 20 bytes.
    Legacy,
}

impl EntryLayout {
    /// Every known layout, widest first.
    pub const ALL: [EntryLayout; 4] = [
        EntryLayout::Canonical,
        EntryLayout::NoInstanceHigh,
        EntryLayout::LegacyResourceId,
        EntryLayout::Legacy,
    ];

    /// Byte width of one entry in this layout.
    pub const fn width(self) -> u32 {
        match self {
            EntryLayout::Canonical => 32,
            EntryLayout::NoInstanceHigh => 28,
            EntryLayout::LegacyResourceId => 24,
            EntryLayout::Legacy => 20,
        }
    }

    /// Finds the layout among `accepted` whose width equals `width`.
    pub fn for_width(width: u32, accepted: &[EntryLayout]) -> Option<EntryLayout> {
        accepted.iter().copied().find(|layout| layout.width() == width)
    }

    /// Decodes one entry from the front of `reader`, advancing it by [`Self::width`] bytes.
    pub fn decode(self, reader: &mut &[u8]) -> Result<IndexEntry> {
        let type_id = reader.read_u32::<LittleEndian>()?;
        let group_id = reader.read_u32::<LittleEndian>()?;

        let entry = match self {
            EntryLayout::Canonical | EntryLayout::NoInstanceHigh => {
                let instance_high = if self == EntryLayout::Canonical {
                    reader.read_u32::<LittleEndian>()?
                } else {
                    0
                };
                IndexEntry {
                    type_id,
                    group_id,
                    instance_high,
                    instance_low: reader.read_u32::<LittleEndian>()?,
                    position: reader.read_u32::<LittleEndian>()?,
                    size: reader.read_u32::<LittleEndian>()?,
                    decompressed_size: reader.read_u32::<LittleEndian>()?,
                    compression_type: reader.read_u16::<LittleEndian>()?,
                    committed: reader.read_u16::<LittleEndian>()?,
                }
            }
            EntryLayout::LegacyResourceId | EntryLayout::Legacy => {
                let instance_low = reader.read_u32::<LittleEndian>()?;
                let instance_high = if self == EntryLayout::LegacyResourceId {
                    reader.read_u32::<LittleEndian>()?
                } else {
                    0
                };
                let position = reader.read_u32::<LittleEndian>()?;
                let size = reader.read_u32::<LittleEndian>()?;
                // 1.x entries do not record compression; the stored size is the payload size.
                IndexEntry {
                    type_id,
                    group_id,
                    instance_high,
                    instance_low,
                    position,
                    size,
                    decompressed_size: size,
                    compression_type: 0,
                    committed: LEGACY_COMMITTED,
                }
            }
        };

        Ok(entry)
    }
}

impl std::fmt::Display for EntryLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EntryLayout::Canonical => write!(f, "canonical"),
            EntryLayout::NoInstanceHigh => write!(f, "no-instance-high"),
            EntryLayout::LegacyResourceId => write!(f, "legacy+resource-id"),
            EntryLayout::Legacy => write!(f, "legacy"),
        }
    }
}
