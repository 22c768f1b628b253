//! List operation - show the catalog contents.

use envuse_core::to_identifier;
use envuse_dts::{StoreLocations, TypeStore};
use eyre::{Context, Result};

use crate::reports::{ListEntry, ListReport};

/// Execute the list operation.
pub fn list(locations: &StoreLocations) -> Result<ListReport> {
    tracing::debug!(definition = %locations.definition.display(), "listing catalog");
    let mut store = TypeStore::new(locations.clone());
    let catalog = store.pull().wrap_err("Failed to read the type catalog")?;

    let entries = catalog
        .keys()
        .map(|key| ListEntry {
            key: key.to_string(),
            identifier: to_identifier(key),
        })
        .collect();

    Ok(ListReport {
        definition: locations.definition.clone(),
        entries,
    })
}
