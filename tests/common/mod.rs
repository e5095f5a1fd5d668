#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use dbpf_reader::{EntryLayout, IndexEntry, HEADER_SIZE};

/// Raw header values, written verbatim by [`header_bytes`].
#[derive(Debug, Clone)]
pub struct HeaderFields {
    pub magic: [u8; 4],
    pub format_major: u32,
    pub format_minor: u32,
    pub user_major: u32,
    pub user_minor: u32,
    pub flags: u32,
    pub creation_time: u32,
    pub modification_time: u32,
    pub index_major_version: u32,
    pub index_entry_count: u32,
    pub index_offset_v1: u32,
    pub index_size: u32,
    pub hole_entry_count: u32,
    pub hole_offset: u32,
    pub hole_size: u32,
    pub index_minor_version: u32,
    pub index_offset_v2: u64,
}

impl Default for HeaderFields {
    fn default() -> Self {
        Self {
            magic: *b"DBPF",
            format_major: 2,
            format_minor: 1,
            user_major: 0,
            user_minor: 0,
            flags: 0,
            creation_time: 0,
            modification_time: 0,
            index_major_version: 0,
            index_entry_count: 0,
            index_offset_v1: 0,
            index_size: 4,
            hole_entry_count: 0,
            hole_offset: 0,
            hole_size: 0,
            index_minor_version: 3,
            index_offset_v2: 0,
        }
    }
}

pub fn header_bytes(h: &HeaderFields) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE);
    out.extend_from_slice(&h.magic);
    for v in [
        h.format_major,
        h.format_minor,
        h.user_major,
        h.user_minor,
        h.flags,
        h.creation_time,
        h.modification_time,
        h.index_major_version,
        h.index_entry_count,
        h.index_offset_v1,
        h.index_size,
        h.hole_entry_count,
        h.hole_offset,
        h.hole_size,
        h.index_minor_version,
    ] {
        out.write_u32::<LittleEndian>(v).unwrap();
    }
    out.write_u64::<LittleEndian>(h.index_offset_v2).unwrap();
    out.extend_from_slice(&[0u8; 24]);
    assert_eq!(out.len(), HEADER_SIZE);
    out
}

pub fn write_entry(out: &mut Vec<u8>, layout: EntryLayout, e: &IndexEntry) {
    out.write_u32::<LittleEndian>(e.type_id).unwrap();
    out.write_u32::<LittleEndian>(e.group_id).unwrap();
    match layout {
        EntryLayout::Canonical | EntryLayout::NoInstanceHigh => {
            if layout == EntryLayout::Canonical {
                out.write_u32::<LittleEndian>(e.instance_high).unwrap();
            }
            out.write_u32::<LittleEndian>(e.instance_low).unwrap();
            out.write_u32::<LittleEndian>(e.position).unwrap();
            out.write_u32::<LittleEndian>(e.size).unwrap();
            out.write_u32::<LittleEndian>(e.decompressed_size).unwrap();
            out.write_u16::<LittleEndian>(e.compression_type).unwrap();
            out.write_u16::<LittleEndian>(e.committed).unwrap();
        }
        EntryLayout::LegacyResourceId | EntryLayout::Legacy => {
            out.write_u32::<LittleEndian>(e.instance_low).unwrap();
            if layout == EntryLayout::LegacyResourceId {
                out.write_u32::<LittleEndian>(e.instance_high).unwrap();
            }
            out.write_u32::<LittleEndian>(e.position).unwrap();
            out.write_u32::<LittleEndian>(e.size).unwrap();
        }
    }
}

/// One resource to embed: its identity, payload and compression tag.
#[derive(Debug, Clone)]
pub struct Resource {
    pub type_id: u32,
    pub group_id: u32,
    pub instance_high: u32,
    pub instance_low: u32,
    pub payload: Vec<u8>,
    pub compression_type: u16,
}

impl Resource {
    pub fn new(type_id: u32, group_id: u32, instance_low: u32, payload: &[u8]) -> Self {
        Self {
            type_id,
            group_id,
            instance_high: 0,
            instance_low,
            payload: payload.to_vec(),
            compression_type: 0,
        }
    }
}

/// A synthetic container plus the entries and offsets written into it.
pub struct Fixture {
    pub bytes: Vec<u8>,
    pub entries: Vec<IndexEntry>,
    /// Offset of the index table's flags word.
    pub index_start: u64,
}

/// Builds a container: header, payloads back to back, index table, hole table.
///
/// The index offset is written to the field the format major version
/// selects; the other offset field gets `decoy_offset`.
pub struct ContainerBuilder {
    pub format_major: u32,
    pub format_minor: u32,
    pub layout: EntryLayout,
    pub resources: Vec<Resource>,
    pub holes: Vec<(u32, u32)>,
    pub decoy_offset: u32,
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self {
            format_major: 2,
            format_minor: 1,
            layout: EntryLayout::Canonical,
            resources: Vec::new(),
            holes: Vec::new(),
            decoy_offset: 0xDEAD,
        }
    }
}

impl ContainerBuilder {
    pub fn resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn build(&self) -> Fixture {
        let mut body = Vec::new();
        let mut entries = Vec::new();
        for r in &self.resources {
            let position = (HEADER_SIZE + body.len()) as u32;
            body.extend_from_slice(&r.payload);
            let len = r.payload.len() as u32;
            let entry = IndexEntry {
                type_id: r.type_id,
                group_id: r.group_id,
                instance_high: r.instance_high,
                instance_low: r.instance_low,
                position,
                size: len,
                decompressed_size: len,
                compression_type: r.compression_type,
                committed: 1,
            };
            entries.push(entry);
        }

        let index_start = (HEADER_SIZE + body.len()) as u64;
        let mut index = vec![0u8; 4];
        for e in &entries {
            write_entry(&mut index, self.layout, e);
        }

        let hole_offset = index_start as u32 + index.len() as u32;
        let mut hole_table = Vec::new();
        for (offset, size) in &self.holes {
            hole_table.write_u32::<LittleEndian>(*offset).unwrap();
            hole_table.write_u32::<LittleEndian>(*size).unwrap();
        }

        let mut h = HeaderFields {
            format_major: self.format_major,
            format_minor: self.format_minor,
            index_major_version: 7,
            index_entry_count: entries.len() as u32,
            index_size: index.len() as u32,
            hole_entry_count: self.holes.len() as u32,
            hole_offset: if self.holes.is_empty() { 0 } else { hole_offset },
            hole_size: hole_table.len() as u32,
            ..HeaderFields::default()
        };
        if self.format_major == 1 {
            h.index_offset_v1 = index_start as u32;
            h.index_offset_v2 = u64::from(self.decoy_offset);
        } else {
            h.index_offset_v1 = self.decoy_offset;
            h.index_offset_v2 = index_start;
        }

        let mut bytes = header_bytes(&h);
        bytes.extend_from_slice(&body);
        bytes.extend_from_slice(&index);
        bytes.extend_from_slice(&hole_table);

        Fixture {
            bytes,
            entries,
            index_start,
        }
    }
}

/// Three small resources with distinct keys and lengths.
pub fn sample_resources() -> Vec<Resource> {
    vec![
        Resource::new(0x220557DA, 0x0000_0000, 0x0000_0001, b"first payload"),
        Resource::new(0x0333406C, 0x8000_0001, 0x0000_0002, b"second"),
        Resource::new(0x2F7D0004, 0x0000_0000, 0x0000_0003, &[0xAB; 40]),
    ]
}
