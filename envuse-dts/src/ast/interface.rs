//! Interface declarations.

use envuse_core::to_identifier;

use super::{Field, TypeNode};
use crate::render::{Line, Renderable};

/// Builder for interface declarations.
///
/// The name is kept raw (it doubles as the catalog key) and only sanitized
/// when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<TypeNode>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Add a prebuilt field.
    pub fn field_with(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Sanitized identifier used in the declaration header.
    pub fn identifier(&self) -> String {
        to_identifier(&self.name)
    }
}

impl Renderable for Interface {
    fn render_at(&self, depth: usize) -> Vec<Line> {
        let mut out = vec![Line::new(depth, format!("interface {} {{", self.identifier()))];
        for field in &self.fields {
            out.extend(field.render_at(depth + 1));
        }
        out.push(Line::new(depth, "}"));
        out
    }
}
