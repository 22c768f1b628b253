use clap::Args;
use eyre::Result;

use super::StoreArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub store: StoreArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::list(&self.store.locations())?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
