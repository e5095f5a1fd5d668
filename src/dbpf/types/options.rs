//! Reader configuration.

use crate::dbpf::format::index::layout::EntryLayout;

/// Options controlling how a [`DbpfReader`](crate::DbpfReader) decodes a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Entry layouts the index may be decoded with. The inferred entry width
    /// must match one of these, otherwise decoding fails with
    /// [`DbpfError::UnsupportedEntryWidth`](super::error::DbpfError::UnsupportedEntryWidth).
    pub layouts: Vec<EntryLayout>,
}

impl ReaderOptions {
    /// Accept only the 32-byte, nine-field entry layout.
    pub fn canonical_only() -> Self {
        Self {
            layouts: vec![EntryLayout::Canonical],
        }
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            layouts: EntryLayout::ALL.to_vec(),
        }
    }
}
