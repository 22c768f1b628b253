use std::path::PathBuf;

use clap::Args;
use envuse_manifest::DocumentFile;
use eyre::Result;

use super::{StoreArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct AttachCommand {
    /// Parsed document (JSON) to attach
    pub document: PathBuf,

    /// Catalog key and interface name (defaults to the document path)
    #[arg(short, long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

impl AttachCommand {
    pub fn run(&self) -> Result<()> {
        let file = DocumentFile::open(&self.document).unwrap_or_exit();
        let name = super::interface_name(self.name.as_deref(), &self.document);
        let locations = self.store.locations();

        let report = ops::attach(file.document(), &name, &locations)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
