use envuse_core::{quote, to_identifier};

use super::{Field, Interface, Union};
use crate::render::{Line, Renderable};

/// A node of the type-expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    /// A bare identifier; the raw text is sanitized on render.
    Keyword(String),
    /// A quoted string literal type.
    StringLiteral(String),
    Any,
    Undefined,
    Null,
    PrimitiveString,
    PrimitiveNumber,
    PrimitiveBoolean,
    Union(Union),
    Field(Field),
    Interface(Interface),
    /// `export` applied to the inner declaration.
    Export(Box<TypeNode>),
}

impl TypeNode {
    pub fn keyword(raw: impl Into<String>) -> Self {
        Self::Keyword(raw.into())
    }

    pub fn string_literal(raw: impl Into<String>) -> Self {
        Self::StringLiteral(raw.into())
    }

    pub fn export(inner: impl Into<TypeNode>) -> Self {
        Self::Export(Box::new(inner.into()))
    }

    /// Wrap `self` as `null | self`.
    pub fn nullable(self) -> Self {
        Self::Union(Union::new(TypeNode::Null).or(self))
    }

    fn single(depth: usize, text: impl Into<String>) -> Vec<Line> {
        vec![Line::new(depth, text)]
    }
}

impl Renderable for TypeNode {
    fn render_at(&self, depth: usize) -> Vec<Line> {
        match self {
            TypeNode::Keyword(raw) => Self::single(depth, to_identifier(raw)),
            TypeNode::StringLiteral(raw) => Self::single(depth, quote(raw)),
            TypeNode::Any => Self::single(depth, "any"),
            TypeNode::Undefined => Self::single(depth, "undefined"),
            TypeNode::Null => Self::single(depth, "null"),
            TypeNode::PrimitiveString => Self::single(depth, "string"),
            TypeNode::PrimitiveNumber => Self::single(depth, "number"),
            TypeNode::PrimitiveBoolean => Self::single(depth, "boolean"),
            TypeNode::Union(union) => union.render_at(depth),
            TypeNode::Field(field) => field.render_at(depth),
            TypeNode::Interface(interface) => interface.render_at(depth),
            TypeNode::Export(inner) => {
                let mut lines = inner.render_at(depth).into_iter();
                let mut out = Vec::new();
                if let Some(first) = lines.next() {
                    out.push(Line::new(depth, format!("export {}", first.text)));
                }
                out.extend(lines);
                out
            }
        }
    }
}

impl From<Union> for TypeNode {
    fn from(union: Union) -> Self {
        Self::Union(union)
    }
}

impl From<Field> for TypeNode {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Interface> for TypeNode {
    fn from(interface: Interface) -> Self {
        Self::Interface(interface)
    }
}
