//! Type-expression tree for declaration files.
//!
//! The vocabulary is closed: [`TypeNode`] covers everything one interface
//! declaration needs, and rendering dispatches over it with a single match.

mod field;
mod interface;
mod node;
mod union;

pub use field::Field;
pub use interface::Interface;
pub use node::TypeNode;
pub use union::Union;
