use dataflip_core::trial_type;
use dataflip_ir::{Context, Method, ReturnShape};
use dataflip_manifest::{ContextConfig, ProcedureDeclaration};
use dataflip_schema::{Connector, SchemaResolver, trial};
use tracing::{debug, warn};

use super::{Error, NoProgress, ProgressEvent, ProgressSink, Result};

/// Builds the IR for one context group.
///
/// Procedures are resolved one at a time in declaration order. The first
/// failure aborts the whole build; a partially built context is never
/// returned.
pub struct ContextBuilder<'a> {
    resolver: SchemaResolver<'a>,
    progress: &'a dyn ProgressSink,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(connector: &'a dyn Connector) -> Self {
        Self {
            resolver: SchemaResolver::new(connector),
            progress: &NoProgress,
        }
    }

    /// Report progress to `sink`.
    pub fn with_progress(mut self, sink: &'a dyn ProgressSink) -> Self {
        self.progress = sink;
        self
    }

    /// Resolve every procedure of `config` and assemble the context.
    pub fn build(&self, config: &ContextConfig) -> Result<Context> {
        if config.name.trim().is_empty() {
            return Err(Error::missing("context", "name"));
        }
        let location = format!("context '{}'", config.name);
        if config.namespace.trim().is_empty() {
            return Err(Error::missing(location, "namespace"));
        }

        self.progress.notify(&ProgressEvent::ContextStarted {
            context: config.name.clone(),
            procedures: config.procedures.len(),
        });

        let mut context = Context::new(&config.namespace, &config.name);
        for (index, declaration) in config.procedures.iter().enumerate() {
            if declaration.name.trim().is_empty() {
                return Err(Error::missing(
                    format!("procedure #{} of {}", index + 1, location),
                    "name",
                ));
            }
            context.push(self.build_method(declaration)?);
        }

        self.progress.notify(&ProgressEvent::ContextDone {
            context: config.name.clone(),
            methods: context.methods().len(),
        });
        Ok(context)
    }

    /// Resolve a single declaration into a method.
    ///
    /// Shape comes first: by trial execution when sample arguments are
    /// declared, otherwise from the declared return type alone. Parameters
    /// are then always introspected by the remote procedure name.
    pub fn build_method(&self, declaration: &ProcedureDeclaration) -> Result<Method> {
        let procedure = declaration.name.as_str();
        self.progress.notify(&ProgressEvent::ProcedureStarted {
            procedure: procedure.to_string(),
            method: declaration.method_name().to_string(),
        });

        let shape = if declaration.is_trial() {
            self.shape_by_trial(declaration)?
        } else {
            self.shape_by_declaration(declaration)?
        };
        self.progress.notify(&ProgressEvent::ShapeResolved {
            procedure: procedure.to_string(),
            shape: shape.kind(),
            columns: match &shape {
                ReturnShape::RowSequence(columns) => columns.len(),
                ReturnShape::Scalar(_) => 1,
                ReturnShape::AffectedCount => 0,
            },
            trial: declaration.is_trial(),
        });

        self.progress.notify(&ProgressEvent::IntrospectingParameters {
            procedure: procedure.to_string(),
        });
        let parameters = self.resolver.resolve_parameters_by_introspection(procedure)?;
        self.progress.notify(&ProgressEvent::ParametersResolved {
            procedure: procedure.to_string(),
            count: parameters.len(),
        });
        debug!(
            procedure,
            parameters = ?parameters.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            "parameters discovered"
        );

        let method = Method::new(declaration.method_name(), procedure, shape)?
            .with_parameters(parameters)
            .with_doc(declaration.doc().map(str::to_string));

        self.progress.notify(&ProgressEvent::ProcedureDone {
            procedure: procedure.to_string(),
        });
        Ok(method)
    }

    fn shape_by_trial(&self, declaration: &ProcedureDeclaration) -> Result<ReturnShape> {
        let procedure = declaration.name.as_str();
        if declaration.returns.is_some() {
            warn!(procedure, "'returns' is ignored for procedures with trial arguments");
        }

        let bindings = trial::bind_all(procedure, &declaration.trial)?;
        self.progress.notify(&ProgressEvent::TrialExecuting {
            procedure: procedure.to_string(),
            arguments: bindings.len(),
        });
        Ok(self
            .resolver
            .resolve_shape_with_bindings(procedure, &bindings)?)
    }

    fn shape_by_declaration(&self, declaration: &ProcedureDeclaration) -> Result<ReturnShape> {
        match declaration.returns.as_deref() {
            Some(token) => {
                let ty = trial_type(token).map_err(|source| Error::TypeMapping {
                    procedure: declaration.name.clone(),
                    source,
                })?;
                Ok(ReturnShape::Scalar(ty.host))
            }
            None => Ok(ReturnShape::AffectedCount),
        }
    }
}
