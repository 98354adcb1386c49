use std::path::PathBuf;

use clap::Args;
use dataflip_manifest::DataflipToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to dataflip.toml (defaults to ./dataflip.toml)
    #[arg(short, long, default_value = "dataflip.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let dataflip_toml = DataflipToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(dataflip_toml.manifest(), &self.config);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
