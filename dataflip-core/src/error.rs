use thiserror::Error;

/// Failure to resolve a type name through the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeMappingError {
    #[error("no host type mapping for {dialect} type '{name}'")]
    UnknownWireType { dialect: &'static str, name: String },

    #[error("unknown type token '{token}'")]
    UnknownTypeToken { token: String },
}
