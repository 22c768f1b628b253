use super::TypeNode;
use crate::render::{Line, Renderable};

/// A union of one or more members.
///
/// The first member renders as-is; every further member opens with `| ` on
/// its first line, at the union's own depth. Only that first line is
/// prefixed, nested unions do not recurse the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    members: Vec<TypeNode>,
}

impl Union {
    /// Start a union from its first member.
    pub fn new(first: impl Into<TypeNode>) -> Self {
        Self {
            members: vec![first.into()],
        }
    }

    /// Build a union from members, or `None` when there are none.
    pub fn from_members(members: impl IntoIterator<Item = TypeNode>) -> Option<Self> {
        let members: Vec<TypeNode> = members.into_iter().collect();
        if members.is_empty() {
            None
        } else {
            Some(Self { members })
        }
    }

    /// Add a member.
    pub fn or(mut self, member: impl Into<TypeNode>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn members(&self) -> &[TypeNode] {
        &self.members
    }
}

impl Renderable for Union {
    fn render_at(&self, depth: usize) -> Vec<Line> {
        let mut out = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            let mut lines = member.render_at(depth).into_iter();
            if i > 0 {
                if let Some(first) = lines.next() {
                    out.push(Line::new(depth, format!("| {}", first.text)));
                }
            }
            out.extend(lines);
        }
        out
    }
}
