//! Progress reporting.
//!
//! The builder announces what it is doing through a [`ProgressSink`]. Sinks
//! are passive observers: they cannot fail and cannot influence resolution.

use std::fmt;

use dataflip_ir::ShapeKind;

/// One step of context building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    ContextStarted {
        context: String,
        procedures: usize,
    },
    ProcedureStarted {
        procedure: String,
        method: String,
    },
    TrialExecuting {
        procedure: String,
        arguments: usize,
    },
    ShapeResolved {
        procedure: String,
        shape: ShapeKind,
        columns: usize,
        trial: bool,
    },
    IntrospectingParameters {
        procedure: String,
    },
    ParametersResolved {
        procedure: String,
        count: usize,
    },
    ProcedureDone {
        procedure: String,
    },
    ContextDone {
        context: String,
        methods: usize,
    },
}

impl ProgressEvent {
    /// Whether this event opens a new section of output.
    pub fn is_header(&self) -> bool {
        matches!(
            self,
            ProgressEvent::ContextStarted { .. } | ProgressEvent::ProcedureStarted { .. }
        )
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::ContextStarted {
                context,
                procedures,
            } => write!(f, "Building context '{}' ({} procedure(s))", context, procedures),
            ProgressEvent::ProcedureStarted { procedure, method } => {
                write!(f, "Generating method '{}' for '{}'", method, procedure)
            }
            ProgressEvent::TrialExecuting {
                procedure,
                arguments,
            } => write!(
                f,
                "Testing '{}' with {} parameter(s) ...",
                procedure, arguments
            ),
            ProgressEvent::ShapeResolved {
                procedure,
                shape,
                columns,
                trial: true,
            } => match shape {
                ShapeKind::RowSequence => write!(
                    f,
                    "'{}' returned {} columns, generating result class.",
                    procedure, columns
                ),
                ShapeKind::Scalar => write!(
                    f,
                    "'{}' returned one column, generating method as scalar.",
                    procedure
                ),
                ShapeKind::AffectedCount => write!(
                    f,
                    "'{}' didn't return any columns, generating method as affected count.",
                    procedure
                ),
            },
            ProgressEvent::ShapeResolved {
                procedure, shape, ..
            } => match shape {
                ShapeKind::Scalar => write!(
                    f,
                    "'{}' declares a return type, generating method as scalar.",
                    procedure
                ),
                _ => write!(
                    f,
                    "'{}' declares no return type, generating method as affected count.",
                    procedure
                ),
            },
            ProgressEvent::IntrospectingParameters { procedure } => {
                write!(f, "Introspecting '{}' to derive the parameters.", procedure)
            }
            ProgressEvent::ParametersResolved { count, .. } => {
                write!(f, "Found {} parameter(s)", count)
            }
            ProgressEvent::ProcedureDone { .. } => write!(f, "Done."),
            ProgressEvent::ContextDone { context, methods } => {
                write!(f, "Context '{}' built with {} method(s)", context, methods)
            }
        }
    }
}

/// Receives progress events.
pub trait ProgressSink: Send + Sync {
    fn notify(&self, event: &ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: Fn(&ProgressEvent) + Send + Sync,
{
    fn notify(&self, event: &ProgressEvent) {
        self(event)
    }
}

/// A sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn notify(&self, _event: &ProgressEvent) {}
}

/// Fans each event out to zero or more observers, in subscription order.
#[derive(Default)]
pub struct ProgressBroadcast<'a> {
    observers: Vec<&'a dyn ProgressSink>,
}

impl<'a> ProgressBroadcast<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(mut self, observer: &'a dyn ProgressSink) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl ProgressSink for ProgressBroadcast<'_> {
    fn notify(&self, event: &ProgressEvent) {
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}
