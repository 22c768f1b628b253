//! Core operations.
//!
//! This module contains the business logic for envuse commands,
//! separated from CLI argument parsing and output rendering.

pub mod attach;
pub mod list;

pub use attach::attach;
pub use list::list;
