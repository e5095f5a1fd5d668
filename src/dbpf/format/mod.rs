//! On-disk layout of a DBPF container and the codecs for each region.
//!
//! [`DbpfReader`](crate::dbpf::reader::DbpfReader) drives these functions;
//! each one takes the source and the values decoded so far and returns the
//! next piece.
//!
//! - [`header`]: the fixed 96-byte block at offset 0
//! - [`index`]: where the resource and hole tables live, and their entries
//! - [`content`]: one payload window per index entry
//!
//! ```text
//! offset 0   header ──────────────┐ header::parse()
//!            payloads ...         │ content::extract_record()
//! index_off  flags word + entries │ index::read_entries()
//! hole_off   (offset, size) pairs ┘ index::holes::read_holes()
//! ```

pub mod content;
pub mod header;
pub mod index;
