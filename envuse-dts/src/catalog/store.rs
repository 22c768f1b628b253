use std::path::{Path, PathBuf};

use envuse_core::{read_optional, read_optional_async, write_file, write_file_async};
use envuse_manifest::{DEFAULT_DECLARATIONS, DEFAULT_DEFINITION, StoreConfig};

use super::{Attached, Catalog, CatalogError, Result, artifacts::decode_definition};
use crate::ast::Interface;

/// Where the two catalog artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocations {
    /// Machine-readable definition (JSON pairs).
    pub definition: PathBuf,
    /// Aggregate declarations file.
    pub declarations: PathBuf,
}

impl StoreLocations {
    pub fn new(definition: impl Into<PathBuf>, declarations: impl Into<PathBuf>) -> Self {
        Self {
            definition: definition.into(),
            declarations: declarations.into(),
        }
    }

    /// Default artifact locations under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_DEFINITION), dir.join(DEFAULT_DECLARATIONS))
    }
}

impl Default for StoreLocations {
    fn default() -> Self {
        Self::new(DEFAULT_DEFINITION, DEFAULT_DECLARATIONS)
    }
}

impl From<&StoreConfig> for StoreLocations {
    fn from(config: &StoreConfig) -> Self {
        Self::new(&config.definition, &config.declarations)
    }
}

/// A catalog bound to its on-disk artifacts.
///
/// Each invocation builds a fresh store, pulls, attaches, and syncs. There is
/// no locking: two invocations racing on the same artifacts end with the
/// later sync winning.
///
/// The blocking (`pull`, `sync`) and async (`pull_async`, `sync_async`)
/// operations leave the catalog in the same state; they differ only in how
/// they wait on I/O.
#[derive(Debug, Clone)]
pub struct TypeStore {
    locations: StoreLocations,
    catalog: Catalog,
}

impl TypeStore {
    /// Create a store with an empty in-memory catalog.
    pub fn new(locations: StoreLocations) -> Self {
        Self {
            locations,
            catalog: Catalog::new(),
        }
    }

    pub fn locations(&self) -> &StoreLocations {
        &self.locations
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load the definition artifact, replacing the in-memory catalog.
    ///
    /// A missing artifact leaves the catalog empty. On any error the
    /// in-memory catalog is left untouched.
    pub fn pull(&mut self) -> Result<&Catalog> {
        let path = &self.locations.definition;
        let content = read_optional(path).map_err(|e| CatalogError::io(path, e))?;
        self.replace(content)
    }

    /// Async counterpart of [`TypeStore::pull`].
    pub async fn pull_async(&mut self) -> Result<&Catalog> {
        let path = &self.locations.definition;
        let content = read_optional_async(path)
            .await
            .map_err(|e| CatalogError::io(path, e))?;
        self.replace(content)
    }

    /// Render an interface and upsert it under its raw name.
    pub fn attach(&mut self, interface: &Interface) -> Attached {
        let attached = self.catalog.attach(interface);
        tracing::debug!(key = %interface.name, ?attached, "attached interface");
        attached
    }

    /// Write both artifacts from the current catalog.
    pub fn sync(&self) -> Result<()> {
        let (definition, declarations) = self.render_artifacts();
        write_file(&self.locations.definition, &definition)
            .map_err(|e| CatalogError::io(&self.locations.definition, e))?;
        write_file(&self.locations.declarations, &declarations)
            .map_err(|e| CatalogError::io(&self.locations.declarations, e))?;
        self.log_synced();
        Ok(())
    }

    /// Async counterpart of [`TypeStore::sync`].
    pub async fn sync_async(&self) -> Result<()> {
        let (definition, declarations) = self.render_artifacts();
        write_file_async(&self.locations.definition, &definition)
            .await
            .map_err(|e| CatalogError::io(&self.locations.definition, e))?;
        write_file_async(&self.locations.declarations, &declarations)
            .await
            .map_err(|e| CatalogError::io(&self.locations.declarations, e))?;
        self.log_synced();
        Ok(())
    }

    /// Consume the store and return its catalog.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    fn replace(&mut self, content: Option<String>) -> Result<&Catalog> {
        let path = &self.locations.definition;
        let catalog = match content {
            Some(content) => {
                decode_definition(&content).map_err(|source| CatalogError::Malformed {
                    path: path.clone(),
                    source,
                })?
            }
            None => {
                tracing::debug!(path = %path.display(), "no definition found, starting empty");
                Catalog::new()
            }
        };
        tracing::debug!(path = %path.display(), entries = catalog.len(), "pulled catalog");
        self.catalog = catalog;
        Ok(&self.catalog)
    }

    /// Both artifacts are rendered before either is written.
    fn render_artifacts(&self) -> (String, String) {
        (self.catalog.definition(), self.catalog.declarations())
    }

    fn log_synced(&self) {
        tracing::debug!(
            definition = %self.locations.definition.display(),
            declarations = %self.locations.declarations.display(),
            entries = self.catalog.len(),
            "synced catalog"
        );
    }
}
