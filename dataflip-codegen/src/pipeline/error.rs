use dataflip_core::TypeMappingError;
use thiserror::Error;

use crate::builder::EmitError;

pub type Result<T> = std::result::Result<T, Error>;

/// A failure while building or rendering a context.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input is missing or unusable.
    #[error("{location}: {message}")]
    Configuration { location: String, message: String },

    /// A declared return type token is not recognised.
    #[error("procedure '{procedure}': {source}")]
    TypeMapping {
        procedure: String,
        #[source]
        source: TypeMappingError,
    },

    #[error(transparent)]
    Resolution(#[from] dataflip_schema::Error),

    #[error(transparent)]
    Ir(#[from] dataflip_ir::Error),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl Error {
    pub(crate) fn missing(location: impl Into<String>, field: &str) -> Self {
        Error::Configuration {
            location: location.into(),
            message: format!("required field '{}' is missing", field),
        }
    }
}
