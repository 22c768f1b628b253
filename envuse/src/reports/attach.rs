//! Attach command report data structures.

use std::path::PathBuf;

use envuse_dts::Attached;

use super::output::{Output, Report};

/// Report data from attaching a document.
#[derive(Debug)]
pub struct AttachReport {
    /// Catalog key.
    pub key: String,
    /// Whether the key was new or replaced.
    pub attached: Attached,
    /// Number of fields in the interface.
    pub fields: usize,
    /// Catalog entries after the sync.
    pub entries: usize,
    pub definition: PathBuf,
    pub declarations: PathBuf,
}

impl Report for AttachReport {
    fn render(&self, out: &mut dyn Output) {
        let item = format!("{} ({} fields)", self.key, self.fields);
        match self.attached {
            Attached::Inserted => {
                out.section("Added");
                out.added_item(&item);
            }
            Attached::Replaced => {
                out.section("Updated");
                out.replaced_item(&item);
            }
        }
        out.newline();
        out.key_value("Entries", &self.entries.to_string());
        out.key_value("Definition", &self.definition.display().to_string());
        out.key_value("Declarations", &self.declarations.display().to_string());
    }
}
