//! Values, errors and options shared by the codecs and the reader.

pub mod error;
pub mod key;
pub mod models;
pub mod options;
