//! Encoding of the two on-disk artifacts.
//!
//! - definition: a pretty-printed JSON array of `[key, text]` pairs, the
//!   machine-readable cache that `pull` reads back
//! - declarations: every stored interface followed by the `MapParsers`
//!   lookup interface

use serde_json::Value;

use super::Catalog;
use crate::{
    ast::{Field, Interface, TypeNode},
    render::Renderable,
};

/// Name of the generated lookup interface.
pub const LOOKUP_INTERFACE: &str = "MapParsers";

/// Separator between stored interfaces (one blank line).
const ENTRY_SEPARATOR: &str = "\n\n";

/// Separator before the lookup interface (two blank lines).
const LOOKUP_SEPARATOR: &str = "\n\n\n";

/// Encode the catalog as the definition artifact.
pub fn encode_definition(catalog: &Catalog) -> String {
    let pairs = catalog
        .iter()
        .map(|(key, text)| {
            Value::Array(vec![
                Value::String(key.to_string()),
                Value::String(text.to_string()),
            ])
        })
        .collect();
    // `{:#}` pretty-prints with two-space indentation.
    format!("{:#}", Value::Array(pairs))
}

/// Decode a definition artifact, keeping the pair order.
pub fn decode_definition(content: &str) -> Result<Catalog, serde_json::Error> {
    let pairs: Vec<(String, String)> = serde_json::from_str(content)?;
    Ok(pairs.into_iter().collect())
}

/// Build `export interface MapParsers { <key>: <identifier> ... }`.
pub fn lookup_interface(catalog: &Catalog) -> TypeNode {
    let interface = catalog
        .keys()
        .map(|key| Field::new(key, TypeNode::keyword(key)))
        .fold(Interface::new(LOOKUP_INTERFACE), Interface::field_with);
    TypeNode::export(interface)
}

/// Render the aggregate declarations artifact.
pub fn render_declarations(catalog: &Catalog) -> String {
    let body = catalog
        .iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR);
    format!(
        "{}{}{}",
        body,
        LOOKUP_SEPARATOR,
        lookup_interface(catalog).to_source()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        [
            ("a", "interface a {\n  name: string\n}"),
            (".envuse", "interface _envuse {\n}"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_encode_empty_definition() {
        assert_eq!(encode_definition(&Catalog::new()), "[]");
    }

    #[test]
    fn test_encode_definition_layout() {
        let expected = "[\n  [\n    \"a\",\n    \"interface a {\\n  name: string\\n}\"\n  ],\n  [\n    \".envuse\",\n    \"interface _envuse {\\n}\"\n  ]\n]";
        assert_eq!(encode_definition(&sample()), expected);
    }

    #[test]
    fn test_decode_keeps_order() {
        let catalog = decode_definition(&encode_definition(&sample())).unwrap();
        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, ["a", ".envuse"]);
        assert_eq!(catalog, sample());
    }

    #[test]
    fn test_decode_rejects_object() {
        assert!(decode_definition("{}").is_err());
        assert!(decode_definition("[[\"only-key\"]]").is_err());
        assert!(decode_definition("not json").is_err());
    }

    #[test]
    fn test_lookup_interface() {
        assert_eq!(
            lookup_interface(&sample()).to_source(),
            "export interface MapParsers {\n  a: a\n  \".envuse\": _envuse\n}"
        );
    }

    #[test]
    fn test_declarations_empty_catalog() {
        assert_eq!(
            render_declarations(&Catalog::new()),
            "\n\n\nexport interface MapParsers {\n}"
        );
    }

    #[test]
    fn test_declarations_layout() {
        assert_eq!(
            render_declarations(&sample()),
            "interface a {\n  name: string\n}\n\ninterface _envuse {\n}\n\n\nexport interface MapParsers {\n  a: a\n  \".envuse\": _envuse\n}"
        );
    }
}
