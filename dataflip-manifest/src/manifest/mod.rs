//! Manifest types and parsing for dataflip.toml files.

mod file;
mod parse;
mod validate;

pub use file::DataflipToml;
use serde::Deserialize;
pub use validate::ParseContext;

use crate::ContextConfig;

/// Root manifest for dataflip.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Context groups, generated in declaration order
    pub contexts: Vec<ContextConfig>,
}

impl Manifest {
    /// Look up a context group by name.
    pub fn context(&self, name: &str) -> Option<&ContextConfig> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Names of all declared context groups, in declaration order.
    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(|c| c.name.as_str())
    }
}
