use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("failed to access '{path}'")]
    #[diagnostic(code(envuse::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog definition '{path}'")]
    #[diagnostic(
        code(envuse::malformed_definition),
        help(
            "the definition must be a JSON array of [key, text] pairs; delete it to start from an empty catalog"
        )
    )]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the artifact involved in the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Malformed { path, .. } => path,
        }
    }
}
