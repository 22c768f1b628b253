//! Attach operation - register a document's interface in the catalog.

use envuse_dts::{StoreLocations, register};
use envuse_manifest::ParsedDocument;
use eyre::{Context, Result};

use crate::reports::AttachReport;

/// Execute the attach operation.
///
/// Pulls the catalog, upserts the document's interface under `name`, and
/// writes both artifacts back.
pub fn attach(
    document: &ParsedDocument,
    name: &str,
    locations: &StoreLocations,
) -> Result<AttachReport> {
    tracing::debug!(
        key = name,
        definition = %locations.definition.display(),
        declarations = %locations.declarations.display(),
        "attaching document"
    );
    let registration = register(document, name, locations)
        .wrap_err_with(|| format!("Failed to attach '{}'", name))?;
    tracing::info!(key = name, attached = ?registration.attached, "attached interface");

    Ok(AttachReport {
        key: registration.key,
        attached: registration.attached,
        fields: document.variables.len(),
        entries: registration.entries,
        definition: locations.definition.clone(),
        declarations: locations.declarations.clone(),
    })
}
