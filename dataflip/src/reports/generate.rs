//! Generate command report data structures.

use dataflip_codegen::language::Artifact;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub contexts: Vec<GeneratedContext>,
    /// Artifacts were rendered but not written.
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct GeneratedContext {
    pub name: String,
    pub methods: usize,
    pub artifacts: Vec<Artifact>,
}

impl GenerateReport {
    fn artifact_count(&self) -> usize {
        self.contexts.iter().map(|c| c.artifacts.len()).sum()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            for artifact in self.contexts.iter().flat_map(|c| &c.artifacts) {
                out.divider(&artifact.path.display().to_string());
                out.preformatted(&artifact.content);
            }
            out.divider("Summary");
            out.preformatted(&format!(
                "{} files would be generated",
                self.artifact_count()
            ));
            return;
        }

        for context in &self.contexts {
            out.section(&format!("{} ({} methods)", context.name, context.methods));
            for artifact in &context.artifacts {
                out.added_item(&format!(
                    "{} [{}]",
                    artifact.path.display(),
                    artifact.backend
                ));
            }
        }
        out.newline();
        out.success(&format!("Generated {} files", self.artifact_count()));
    }
}
