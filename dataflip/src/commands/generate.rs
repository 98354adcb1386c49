use std::path::PathBuf;

use clap::Args;
use dataflip_codegen::pipeline::connection_string;
use dataflip_core::File;
use dataflip_manifest::{ContextConfig, DataflipToml};
use dataflip_postgres::PostgresConnector;
use eyre::{Context, Result, eyre};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{GenerateReport, GeneratedContext, Report, TerminalOutput, TerminalProgress},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to dataflip.toml (defaults to ./dataflip.toml)
    #[arg(short, long, default_value = "dataflip.toml")]
    pub config: PathBuf,

    /// Only generate the named context
    #[arg(long)]
    pub context: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the resolved IR as JSON instead of generating code
    #[arg(long)]
    pub dump_ir: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let dataflip_toml = DataflipToml::open(&self.config).unwrap_or_exit();
        let contexts = self.selected_contexts(&dataflip_toml)?;
        debug!(
            contexts = ?contexts.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            "selected contexts"
        );
        let progress = TerminalProgress;

        let mut resolved = Vec::with_capacity(contexts.len());
        for config in contexts {
            let url = connection_string(config)?;
            let connector = PostgresConnector::new(url);
            let context = ops::build_context(&connector, config, &progress)?;
            resolved.push((config, context));
        }

        if self.dump_ir {
            let ir: Vec<_> = resolved.iter().map(|(_, context)| context).collect();
            let json = serde_json::to_string_pretty(&ir).wrap_err("Failed to serialize IR")?;
            println!("{}", json);
            return Ok(());
        }

        let mut generated = Vec::with_capacity(resolved.len());
        for (config, context) in &resolved {
            let artifacts = ops::render_artifacts(context, &config.output, dataflip_toml.root())?;
            generated.push(GeneratedContext {
                name: context.name().to_string(),
                methods: context.methods().len(),
                artifacts,
            });
        }

        // Nothing is written until every context has resolved and rendered.
        if !self.dry_run {
            for artifact in generated.iter().flat_map(|c| &c.artifacts) {
                debug!(path = %artifact.path.display(), backend = artifact.backend, "writing");
                File::new(artifact.path.clone(), artifact.content.clone())
                    .write()
                    .wrap_err_with(|| format!("Failed to write {}", artifact.path.display()))?;
            }
        }

        let report = GenerateReport {
            contexts: generated,
            dry_run: self.dry_run,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn selected_contexts<'a>(
        &self,
        dataflip_toml: &'a DataflipToml,
    ) -> Result<Vec<&'a ContextConfig>> {
        let manifest = dataflip_toml.manifest();
        match &self.context {
            Some(name) => {
                let context = manifest.context(name).ok_or_else(|| {
                    let available: Vec<_> = manifest.context_names().collect();
                    eyre!(
                        "No context named '{}' in {} (available: {})",
                        name,
                        dataflip_toml.path().display(),
                        available.join(", ")
                    )
                })?;
                Ok(vec![context])
            }
            None => Ok(manifest.contexts.iter().collect()),
        }
    }
}
