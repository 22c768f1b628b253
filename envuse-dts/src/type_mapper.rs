//! Mapping from parsed documents to interface declarations.

use envuse_core::DeclaredType;
use envuse_manifest::{ParsedDocument, Variable};

use crate::ast::{Field, Interface, TypeNode};

/// Map a declared type to its type node.
///
/// Unrecognized or missing types fall back to `any`.
pub fn map_declared_type(declared: Option<&DeclaredType>) -> TypeNode {
    match declared {
        Some(DeclaredType::Boolean) => TypeNode::PrimitiveBoolean,
        Some(DeclaredType::Number) => TypeNode::PrimitiveNumber,
        Some(DeclaredType::String) => TypeNode::PrimitiveString,
        Some(DeclaredType::Other(_)) | None => TypeNode::Any,
    }
}

/// Map a variable to its field value (`null | T` when nullable).
pub fn map_variable(variable: &Variable) -> TypeNode {
    let value = map_declared_type(variable.declared_type.as_ref());
    if variable.nullable {
        value.nullable()
    } else {
        value
    }
}

/// Build the interface for a document under the given logical name.
///
/// One field per variable, in declaration order. Names are neither
/// deduplicated nor validated here.
pub fn interface_for(document: &ParsedDocument, name: impl Into<String>) -> Interface {
    document
        .variables
        .iter()
        .map(|variable| Field::new(variable.name.clone(), map_variable(variable)))
        .fold(Interface::new(name), Interface::field_with)
}
