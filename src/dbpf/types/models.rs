//! Value types decoded from a container: the header, the table descriptors
//! derived from it, index entries, holes and extracted records.

use std::fmt;

use super::key::ResourceKey;

/// The 4-byte signature every container starts with.
pub const MAGIC: [u8; 4] = *b"DBPF";

/// Size of the fixed header block in bytes.
pub const HEADER_SIZE: usize = 96;

/// Number of flag bytes preceding the first entry of the resource index.
pub const INDEX_FLAGS_SIZE: u32 = 4;

/// A `major.minor` version pair as stored in the header.
///
/// Versions are read as decimals by concatenating the digits, so `2, 1`
/// reads as `2.1`. Minor values above 9 are not produced by the format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Returns the version as a decimal number (`2.1` for major 2, minor 1).
    pub fn as_f64(&self) -> f64 {
        // Two runs of decimal digits around a dot always parse as a float.
        format!("{}.{}", self.major, self.minor)
            .parse()
            .expect("digits.digits is a valid float literal")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Decoded container header.
///
/// Both index offset fields are kept exactly as stored; which one is
/// authoritative depends on the format major version (see
/// [`OffsetField::for_format`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 4],
    pub format_major: u32,
    pub format_minor: u32,
    pub user_major: u32,
    pub user_minor: u32,
    /// Reserved by the format; unused.
    pub flags: u32,
    pub creation_time: u32,
    pub modification_time: u32,
    pub index_major_version: u32,
    pub index_entry_count: u32,
    /// Index offset used by version 1.x containers.
    pub index_offset_v1: u32,
    /// Size of the index table, including its 4 leading flag bytes.
    pub index_size: u32,
    pub hole_entry_count: u32,
    pub hole_offset: u32,
    pub hole_size: u32,
    pub index_minor_version: u32,
    /// Index offset used by version 2.x and later containers.
    pub index_offset_v2: u64,
    pub reserved: [u8; 24],
}

impl Header {
    /// Container format version.
    pub fn version(&self) -> Version {
        Version::new(self.format_major, self.format_minor)
    }

    /// User-defined format version.
    pub fn user_version(&self) -> Version {
        Version::new(self.user_major, self.user_minor)
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn creation_time(&self) -> u32 {
        self.creation_time
    }

    pub fn modification_time(&self) -> u32 {
        self.modification_time
    }
}

/// Which header field holds the resource index offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetField {
    /// The 32-bit field written by version 1.x containers.
    Legacy,
    /// The 64-bit field introduced with version 2.0.
    Modern,
}

impl OffsetField {
    /// Selects the authoritative offset field for a format major version.
    pub fn for_format(format_major: u32) -> Self {
        if format_major == 1 {
            Self::Legacy
        } else {
            Self::Modern
        }
    }
}

/// Location and shape of a table (resource index or hole index) in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDescriptor {
    pub version: Version,
    pub count: u32,
    /// Absolute offset of the first entry.
    pub offset: u64,
    /// Size in bytes of the entry area.
    pub size: u32,
}

/// Codec identified by an entry's compression tag.
///
/// The tag is only classified here; decoding the payload is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionKind {
    Uncompressed,
    Zlib,
    RefPack,
    Streamable,
    Deleted,
    Unknown(u16),
}

impl From<u16> for CompressionKind {
    fn from(tag: u16) -> Self {
        match tag {
            0x0000 => Self::Uncompressed,
            0x5A42 => Self::Zlib,
            0xFFFF => Self::RefPack,
            0xFFFE => Self::Streamable,
            0xFFE0 => Self::Deleted,
            other => Self::Unknown(other),
        }
    }
}

/// A single decoded entry of the resource index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub type_id: u32,
    pub group_id: u32,
    pub instance_high: u32,
    pub instance_low: u32,
    /// Absolute offset of the payload.
    pub position: u32,
    /// Payload size as stored in the container.
    pub size: u32,
    /// Payload size after decompression.
    pub decompressed_size: u32,
    pub compression_type: u16,
    pub committed: u16,
}

impl IndexEntry {
    /// The key records built from this entry are filed under.
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(self.type_id, self.group_id, self.instance_low)
    }

    /// Full 64-bit instance identifier.
    pub fn instance(&self) -> u64 {
        (u64::from(self.instance_high) << 32) | u64::from(self.instance_low)
    }

    pub fn compression(&self) -> CompressionKind {
        CompressionKind::from(self.compression_type)
    }

    pub fn is_compressed(&self) -> bool {
        !matches!(self.compression(), CompressionKind::Uncompressed)
    }
}

/// A free byte range listed in the hole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hole {
    pub offset: u32,
    pub size: u32,
}

/// A resource payload read out of the container.
///
/// `raw` holds exactly `length` bytes taken from `offset`. No decompression
/// is applied: for compressed entries these are the on-disk bytes, and
/// `stored_size` tells the caller how many of them belong to the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: ResourceKey,
    pub offset: u64,
    /// Declared decompressed size; always equal to `raw.len()`.
    pub length: u32,
    pub stored_size: u32,
    pub compression_type: u16,
    pub raw: Vec<u8>,
}

impl Record {
    pub fn compression(&self) -> CompressionKind {
        CompressionKind::from(self.compression_type)
    }
}
