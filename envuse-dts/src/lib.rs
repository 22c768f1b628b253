//! Declaration-file types for envuse documents.
//!
//! This crate turns parsed envuse documents into interface declarations and
//! keeps a persistent catalog of them, aggregated into a single declarations
//! file with a generated `MapParsers` lookup interface.
//!
//! # Usage
//!
//! ```ignore
//! use envuse_dts::{StoreLocations, TypeStore, interface_for};
//! use envuse_manifest::DocumentFile;
//!
//! let document = DocumentFile::open("doc.json")?.into_document();
//! let mut store = TypeStore::new(StoreLocations::default());
//!
//! store.pull()?;
//! store.attach(&interface_for(&document, ".envuse"));
//! store.sync()?;
//! ```
//!
//! # Module Organization
//!
//! - [`ast`] - the type-expression tree ([`TypeNode`], [`Interface`], ...)
//! - [`render`] - line-based rendering ([`Renderable`], [`Line`])
//! - [`type_mapper`] - parsed document → [`Interface`]
//! - [`catalog`] - the ordered catalog and its on-disk store

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
pub mod catalog;
pub mod render;
pub mod type_mapper;

mod register;

pub use ast::{Field, Interface, TypeNode, Union};
pub use catalog::{Attached, Catalog, CatalogError, StoreLocations, TypeStore};
pub use register::{Registration, register, register_async};
pub use render::{Line, Renderable};
pub use type_mapper::interface_for;
