//! Persistent catalog of rendered interfaces.
//!
//! - [`Catalog`] - ordered key → rendered text map, held in memory
//! - [`TypeStore`] - a catalog bound to its two on-disk artifacts, with
//!   blocking and async `pull`/`sync`
//!
//! Insertion order is significant: it decides the order of entries in both
//! artifacts, so the catalog is backed by an [`IndexMap`].

mod artifacts;
mod error;
mod store;

use indexmap::IndexMap;

pub use artifacts::{
    LOOKUP_INTERFACE, decode_definition, encode_definition, lookup_interface, render_declarations,
};
pub use error::{CatalogError, Result};
pub use store::{StoreLocations, TypeStore};

use crate::{
    ast::{Interface, TypeNode},
    render::Renderable,
};

/// Outcome of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attached {
    /// The key was new and was appended.
    Inserted,
    /// The key existed; its text was replaced in place.
    Replaced,
}

/// Ordered map from catalog key to rendered interface text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: IndexMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render an interface and upsert it under its raw name.
    pub fn attach(&mut self, interface: &Interface) -> Attached {
        self.insert(interface.name.clone(), interface.to_source())
    }

    /// Upsert a key. Existing keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Attached {
        match self.entries.insert(key.into(), text.into()) {
            Some(_) => Attached::Replaced,
            None => Attached::Inserted,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The generated `MapParsers` lookup interface.
    pub fn lookup_interface(&self) -> TypeNode {
        artifacts::lookup_interface(self)
    }

    /// Content of the definition artifact.
    pub fn definition(&self) -> String {
        artifacts::encode_definition(self)
    }

    /// Content of the aggregate declarations artifact.
    pub fn declarations(&self) -> String {
        artifacts::render_declarations(self)
    }
}

impl FromIterator<(String, String)> for Catalog {
    /// Later duplicates overwrite earlier ones in place.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
