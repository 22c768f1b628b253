//! Line-based rendering for type-expression nodes.
//!
//! Nodes do not write to a buffer directly. They produce [`Line`]s, each
//! carrying its own indentation level, so that parents can splice a child's
//! output (e.g., inline after a field colon) without re-indenting it.

use std::fmt;

/// One indentation level (two spaces).
pub const INDENT: &str = "  ";

/// A rendered line with its indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub indent: usize,
    pub text: String,
}

impl Line {
    pub fn new(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indent {
            f.write_str(INDENT)?;
        }
        f.write_str(&self.text)
    }
}

/// Join lines into source text, one per line, without a trailing newline.
pub fn flatten(lines: &[Line]) -> String {
    lines
        .iter()
        .map(Line::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trait for nodes that render to indented lines.
///
/// Every node produces at least one line.
pub trait Renderable {
    /// Render the node starting at the given depth.
    fn render_at(&self, depth: usize) -> Vec<Line>;

    /// Render the node at depth 0.
    fn render(&self) -> Vec<Line> {
        self.render_at(0)
    }

    /// Render the node at depth 0 and flatten it to source text.
    fn to_source(&self) -> String {
        flatten(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_display() {
        assert_eq!(Line::new(0, "a").to_string(), "a");
        assert_eq!(Line::new(2, "b").to_string(), "    b");
    }

    #[test]
    fn test_flatten() {
        let lines = vec![Line::new(0, "x {"), Line::new(1, "y"), Line::new(0, "}")];
        assert_eq!(flatten(&lines), "x {\n  y\n}");
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(flatten(&[]), "");
    }
}
