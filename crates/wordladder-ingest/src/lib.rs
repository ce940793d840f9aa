//! Word Ladder Ingest — dictionary files to normalized word tokens.
//!
//! [`word_stream`] yields words lazily and reports read errors per item;
//! it is what the CLI loads through. [`read_words`] is the eager variant:
//! it reads the whole file up front and fails as a unit.

pub mod words;

pub use words::{normalize_line, normalize_words, read_words, word_stream};
