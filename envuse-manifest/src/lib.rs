//! Inputs of the envuse type catalog.
//!
//! - [`ParsedDocument`] - the declaration parser's output (variables in order)
//! - [`Config`] - `envuse.toml`, locating the catalog artifacts

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod document;
mod error;

pub use config::{Config, DEFAULT_DECLARATIONS, DEFAULT_DEFINITION, StoreConfig};
pub use document::{DocumentFile, ParsedDocument, Variable};
pub use error::{Error, Result, SourceContext};
