//! DBPF container reading: format codecs, value types and the reader facade.

pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;
