//! One-shot registration of a document into the catalog.

use envuse_manifest::ParsedDocument;

use crate::{
    catalog::{Attached, Result, StoreLocations, TypeStore},
    render::Renderable,
    type_mapper::interface_for,
};

/// Outcome of [`register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Catalog key (the logical name as given).
    pub key: String,
    /// Rendered interface text stored under the key.
    pub text: String,
    pub attached: Attached,
    /// Number of catalog entries after the sync.
    pub entries: usize,
}

/// Pull the catalog, attach the document's interface, and sync.
pub fn register(
    document: &ParsedDocument,
    name: &str,
    locations: &StoreLocations,
) -> Result<Registration> {
    let mut store = TypeStore::new(locations.clone());
    store.pull()?;
    let registration = attach(&mut store, document, name);
    store.sync()?;
    Ok(registration)
}

/// Async counterpart of [`register`].
pub async fn register_async(
    document: &ParsedDocument,
    name: &str,
    locations: &StoreLocations,
) -> Result<Registration> {
    let mut store = TypeStore::new(locations.clone());
    store.pull_async().await?;
    let registration = attach(&mut store, document, name);
    store.sync_async().await?;
    Ok(registration)
}

fn attach(store: &mut TypeStore, document: &ParsedDocument, name: &str) -> Registration {
    let interface = interface_for(document, name);
    let attached = store.attach(&interface);
    Registration {
        key: interface.name.clone(),
        text: interface.to_source(),
        attached,
        entries: store.catalog().len(),
    }
}
