//! List command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// A catalog entry as listed.
#[derive(Debug)]
pub struct ListEntry {
    pub key: String,
    /// Identifier of the generated interface.
    pub identifier: String,
}

/// Report data from listing the catalog.
#[derive(Debug)]
pub struct ListReport {
    pub definition: PathBuf,
    pub entries: Vec<ListEntry>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.preformatted(&format!(
                "No interfaces in {}.",
                self.definition.display()
            ));
            return;
        }

        out.section("Interfaces");
        for entry in &self.entries {
            out.list_item(&format!("{} -> {}", entry.key, entry.identifier));
        }
    }
}
