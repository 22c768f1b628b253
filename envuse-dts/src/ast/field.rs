use envuse_core::property_name;

use super::TypeNode;
use crate::render::{Line, Renderable};

/// A named field of an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: Box<TypeNode>,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<TypeNode>) -> Self {
        Self {
            name: name.into(),
            value: Box::new(value.into()),
        }
    }
}

impl Renderable for Field {
    /// Renders as a single line: the value is rendered at the field's own
    /// depth and placed inline after the colon. Continuation lines of the
    /// value keep their own indentation, so a `null | number` value renders
    /// as `FOO: null` followed by `| number` at the field's depth.
    fn render_at(&self, depth: usize) -> Vec<Line> {
        let mut value = self.value.render_at(depth).into_iter();
        let mut text = format!("{}: ", property_name(&self.name));
        if let Some(first) = value.next() {
            text.push_str(&first.text);
        }
        for line in value {
            text.push('\n');
            text.push_str(&line.to_string());
        }
        vec![Line::new(depth, text)]
    }
}
