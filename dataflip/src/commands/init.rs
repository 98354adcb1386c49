use std::path::PathBuf;

use clap::Args;
use dataflip_core::{File, Overwrite, WriteResult};
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

use crate::{
    ops::STARTER_MANIFEST,
    reports::{Output, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the configuration
    #[arg(short, long, default_value = "dataflip.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        let file = File::new(&self.output, STARTER_MANIFEST);

        let overwrite = if !file.exists() || self.force {
            Overwrite::Always
        } else if Self::confirm_overwrite(&self.output)? {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        let result = file
            .with_overwrite(overwrite)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", self.output.display()))?;

        match result {
            WriteResult::Written => {
                out.success(&format!("Created {}", self.output.display()));
                out.preformatted(
                    "Edit the connection and procedures, then run 'dataflip generate'.",
                );
            }
            WriteResult::Skipped => {
                out.warning(&format!(
                    "{} already exists, left unchanged",
                    self.output.display()
                ));
            }
        }

        Ok(())
    }

    fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}
