use std::path::PathBuf;

use serde::Deserialize;

use crate::ProcedureDeclaration;

/// One `[[contexts]]` entry: a generated context class and its procedures.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextConfig {
    /// Name of the generated context class
    pub name: String,

    /// Dotted namespace the class is emitted into
    pub namespace: String,

    pub database: DatabaseConfig,

    pub output: OutputConfig,

    /// Procedures in the order their methods are generated
    pub procedures: Vec<ProcedureDeclaration>,
}

/// Where to find the database the procedures live in.
///
/// Exactly one of `url` or `env` must be set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Literal connection string
    pub url: Option<String>,

    /// Environment variable holding the connection string
    pub env: Option<String>,
}

/// Resolved form of [`DatabaseConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionSource<'a> {
    Url(&'a str),
    Env(&'a str),
}

impl DatabaseConfig {
    /// Which connection source is configured.
    pub fn source(&self) -> Result<ConnectionSource<'_>, &'static str> {
        match (&self.url, &self.env) {
            (Some(url), None) => Ok(ConnectionSource::Url(url)),
            (None, Some(env)) => Ok(ConnectionSource::Env(env)),
            _ => Err("database must set exactly one of 'url' or 'env'"),
        }
    }
}

/// Artifact destinations for one context.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Host-language (C#) source file
    pub host: PathBuf,

    /// Optional TypeScript typings file
    pub typings: Option<PathBuf>,

    /// Lower-case the first letter of typings field names
    #[serde(default)]
    pub camel_case: bool,

    /// Optional Angular template with table and form bindings
    pub bindings: Option<PathBuf>,
}
