//! Core utilities and types for the envuse type catalog.
//!
//! This crate provides the fundamental pieces shared across the envuse
//! ecosystem: identifier sanitizing, the declared-type vocabulary, and
//! the byte-level artifact I/O used by the catalog.

mod file;
mod ident;
mod types;

// Artifact I/O
pub use file::{read_optional, read_optional_async, write_file, write_file_async};
// Identifier utilities
pub use ident::{is_word_char, needs_quotes, property_name, quote, to_identifier};
// Fundamental types
pub use types::DeclaredType;
