use dataflip_core::{HostType, TypeMappingError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A failure while resolving one procedure against the remote system.
///
/// Every variant names the procedure it was raised for.
#[derive(Debug, Error)]
pub enum Error {
    #[error("procedure '{procedure}': {source}")]
    TypeMapping {
        procedure: String,
        #[source]
        source: TypeMappingError,
    },

    #[error("could not connect to the database while resolving '{procedure}': {message}")]
    Connection { procedure: String, message: String },

    #[error("procedure '{procedure}' was not found")]
    ProcedureNotFound { procedure: String },

    #[error("failed to introspect the parameters of '{procedure}': {message}")]
    Introspection { procedure: String, message: String },

    #[error("trial execution of '{procedure}' failed: {message}")]
    TrialExecution { procedure: String, message: String },

    #[error("procedure '{procedure}': malformed trial argument '{expression}': {reason}")]
    InvalidTrialArgument {
        procedure: String,
        expression: String,
        reason: String,
    },

    #[error(
        "procedure '{procedure}': there was a problem converting the value '{value}' of '{parameter}' to {host:?}"
    )]
    TrialValue {
        procedure: String,
        parameter: String,
        value: String,
        host: HostType,
    },
}

impl Error {
    /// Name of the procedure this error was raised for.
    pub fn procedure(&self) -> &str {
        match self {
            Error::TypeMapping { procedure, .. }
            | Error::Connection { procedure, .. }
            | Error::ProcedureNotFound { procedure }
            | Error::Introspection { procedure, .. }
            | Error::TrialExecution { procedure, .. }
            | Error::InvalidTrialArgument { procedure, .. }
            | Error::TrialValue { procedure, .. } => procedure,
        }
    }
}
