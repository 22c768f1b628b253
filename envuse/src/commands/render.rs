use std::path::PathBuf;

use clap::Args;
use envuse_dts::{Renderable, interface_for};
use envuse_manifest::DocumentFile;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// Parsed document (JSON) to render
    pub document: PathBuf,

    /// Interface name (defaults to the document path)
    #[arg(short, long)]
    pub name: Option<String>,
}

impl RenderCommand {
    /// Run the render command; the catalog is not touched
    pub fn run(&self) -> Result<()> {
        let file = DocumentFile::open(&self.document).unwrap_or_exit();
        let name = super::interface_name(self.name.as_deref(), &self.document);

        println!("{}", interface_for(file.document(), name).to_source());
        Ok(())
    }
}
