//! # dbpf-reader
//!
//! A reader for DBPF ("database packed file") containers, the `.package` and
//! `.dat` archives used by several game engines to bundle resources.
//! Supports format versions 1.x and 2.x.
//!
//! Payloads are returned as stored; decompression is left to the caller.
pub mod dbpf;

// Flat paths for the public API
pub use dbpf::{
    format::index::layout::EntryLayout,
    iter::RecordIterator,
    reader::DbpfReader,
    types::{
        error::{DbpfError, Result},
        key::ResourceKey,
        models::{
            CompressionKind, Header, Hole, IndexDescriptor, IndexEntry, OffsetField, Record,
            Version, HEADER_SIZE, MAGIC,
        },
        options::ReaderOptions,
    },
};
