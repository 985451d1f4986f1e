//! Corpus indexing module.
//!
//! Turns a directory of heading-delimited note files into an
//! `InvertedIndex`:
//!
//! - File system walking with pattern matching
//! - Structural parsing of note files into documents
//! - Corpus loading that builds a complete index or fails

pub mod loader;
pub mod parser;
pub mod walker;

pub use loader::CorpusLoader;
pub use parser::NoteParser;
pub use walker::FileWalker;
