//! The parsed-document input contract.
//!
//! The envuse declaration language is lexed and parsed elsewhere; what reaches
//! this crate is the parser's output, an ordered list of variable records
//! serialized as JSON:
//!
//! ```json
//! { "variables": [{ "name": "PORT", "type": "number", "nullable": false }] }
//! ```

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use envuse_core::DeclaredType;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext};

/// A variable record produced by the declaration parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Variable {
    pub name: String,
    /// Type token as written in the source, if any.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<DeclaredType>,
    #[serde(default)]
    pub nullable: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            nullable: false,
        }
    }

    pub fn typed(mut self, ty: impl Into<DeclaredType>) -> Self {
        self.declared_type = Some(ty.into());
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// A parsed document: variables in declaration order.
///
/// Duplicate names are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl ParsedDocument {
    pub fn new(variables: impl IntoIterator<Item = Variable>) -> Self {
        Self {
            variables: variables.into_iter().collect(),
        }
    }

    /// Parse a document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| SourceContext::new(content, filename).document_error(e))
    }
}

impl FromStr for ParsedDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "document.json")
    }
}

/// A document file on disk with its parsed content.
pub struct DocumentFile {
    path: PathBuf,
    document: ParsedDocument,
}

impl DocumentFile {
    /// Open and parse a document file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let document = ParsedDocument::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, document })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed document.
    pub fn document(&self) -> &ParsedDocument {
        &self.document
    }

    /// Consume the file and return the parsed document.
    pub fn into_document(self) -> ParsedDocument {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_document() {
        let doc: ParsedDocument = r#"{
            "variables": [
                { "name": "AAA", "type": "Unknown" },
                { "name": "FOO", "type": "number", "nullable": true },
                { "name": "BAZ" }
            ]
        }"#
        .parse()
        .unwrap();

        assert_eq!(
            doc.variables,
            vec![
                Variable::new("AAA").typed("Unknown"),
                Variable::new("FOO").typed("number").nullable(),
                Variable::new("BAZ"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_document() {
        let doc: ParsedDocument = "{}".parse().unwrap();
        assert!(doc.variables.is_empty());
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = "{ \"variables\": [ { \"nope\": 1 } ] }"
            .parse::<ParsedDocument>()
            .unwrap_err();
        match *err {
            Error::Document { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = DocumentFile::open(temp.path().join("missing.json"))
            .err()
            .unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_document_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.json");
        std::fs::write(&path, r#"{ "variables": [{ "name": "PORT", "type": "number" }] }"#)
            .unwrap();

        let file = DocumentFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.document().variables.len(), 1);
    }
}
