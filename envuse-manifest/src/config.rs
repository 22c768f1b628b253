//! `envuse.toml` configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext};

/// Default location of the catalog definition artifact.
pub const DEFAULT_DEFINITION: &str = ".envuse/def.json";

/// Default location of the aggregate declarations artifact.
pub const DEFAULT_DECLARATIONS: &str = ".envuse/types.d.ts";

/// Root of `envuse.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[store]` section: where the catalog artifacts live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default = "default_definition")]
    pub definition: PathBuf,
    #[serde(default = "default_declarations")]
    pub declarations: PathBuf,
}

fn default_definition() -> PathBuf {
    PathBuf::from(DEFAULT_DEFINITION)
}

fn default_declarations() -> PathBuf {
    PathBuf::from(DEFAULT_DECLARATIONS)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            definition: default_definition(),
            declarations: default_declarations(),
        }
    }
}

impl Config {
    /// Load `envuse.toml` from the given path.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = envuse_core::read_optional(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        match content {
            Some(content) => Self::from_str_with_filename(&content, &path.display().to_string()),
            None => Ok(Self::default()),
        }
    }

    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SourceContext::new(content, filename).config_error(e))
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "envuse.toml")
    }
}
