mod attach;
mod completions;
mod list;
mod render;

use std::path::PathBuf;

use attach::AttachCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use envuse_dts::StoreLocations;
use envuse_manifest::Config;
use eyre::Result;
use list::ListCommand;
use render::RenderCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for envuse_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "envuse")]
#[command(version)]
#[command(about = "Generate declaration-file types for envuse documents")]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Attach(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the interface generated for a parsed document
    Render(RenderCommand),

    /// Add or replace a document's interface in the type catalog
    Attach(AttachCommand),

    /// List the interfaces stored in the type catalog
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options locating the catalog artifacts.
#[derive(Args)]
pub(crate) struct StoreArgs {
    /// Path to envuse.toml (defaults to ./envuse.toml)
    #[arg(short, long, default_value = "envuse.toml")]
    pub config: PathBuf,

    /// Definition artifact (overrides envuse.toml)
    #[arg(long)]
    pub definition: Option<PathBuf>,

    /// Declarations artifact (overrides envuse.toml)
    #[arg(long)]
    pub declarations: Option<PathBuf>,
}

impl StoreArgs {
    /// Resolve artifact locations: flags, then envuse.toml, then defaults.
    pub fn locations(&self) -> StoreLocations {
        let config = Config::load(&self.config).unwrap_or_exit();
        let mut locations = StoreLocations::from(&config.store);
        if let Some(definition) = &self.definition {
            locations.definition = definition.clone();
        }
        if let Some(declarations) = &self.declarations {
            locations.declarations = declarations.clone();
        }
        locations
    }
}

/// The explicit `--name`, or the document path as given.
pub(crate) fn interface_name(name: Option<&str>, document: &std::path::Path) -> String {
    name.map(str::to_string)
        .unwrap_or_else(|| document.display().to_string())
}
