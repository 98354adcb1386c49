//! Generate operation: context building and artifact rendering.

use std::path::Path;

use dataflip_codegen::{
    language::{Artifact, Backend},
    pipeline::{ContextBuilder, ProgressSink},
};
use dataflip_codegen_csharp::Generator as CSharpGenerator;
use dataflip_codegen_typescript::{BindingsGenerator, TypingsGenerator};
use dataflip_ir::Context;
use dataflip_manifest::{ContextConfig, OutputConfig};
use dataflip_schema::Connector;
use eyre::{Context as _, Result};
use tracing::{debug, warn};

/// Resolve every procedure of one context group into IR.
pub fn build_context(
    connector: &dyn Connector,
    config: &ContextConfig,
    progress: &dyn ProgressSink,
) -> Result<Context> {
    ContextBuilder::new(connector)
        .with_progress(progress)
        .build(config)
        .wrap_err_with(|| format!("Failed to build context '{}'", config.name))
}

/// Render every configured backend, resolving output paths against `root`.
///
/// The host artifact is always rendered; typings and bindings only when their
/// path is set.
pub fn render_artifacts(
    context: &Context,
    output: &OutputConfig,
    root: &Path,
) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();

    artifacts.push(render(&CSharpGenerator, context, &root.join(&output.host))?);

    if let Some(typings) = &output.typings {
        let generator = TypingsGenerator::new(output.camel_case);
        artifacts.push(render(&generator, context, &root.join(typings))?);
    }

    if let Some(bindings) = &output.bindings {
        let generator = BindingsGenerator::new(output.camel_case);
        artifacts.push(render(&generator, context, &root.join(bindings))?);
    }

    Ok(artifacts)
}

fn render(backend: &dyn Backend, context: &Context, path: &Path) -> Result<Artifact> {
    if !backend.accepts_path(path) {
        warn!(
            "{} output '{}' does not end in .{}",
            backend.name(),
            path.display(),
            backend.file_extension()
        );
    }
    debug!(backend = backend.name(), context = context.name(), "rendering");
    backend
        .artifact(context, path.to_path_buf())
        .wrap_err_with(|| format!("{} backend failed for '{}'", backend.name(), context.name()))
}
