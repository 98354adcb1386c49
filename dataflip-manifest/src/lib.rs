//! Parsing and validation of `dataflip.toml`.
//!
//! A manifest declares one or more context groups. Each group names the
//! database to resolve against, where to write artifacts, and the ordered
//! list of procedures to generate methods for.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod error;
mod manifest;
mod procedure;

pub use context::{ConnectionSource, ContextConfig, DatabaseConfig, OutputConfig};
pub use error::{Error, Result, SourceContext};
pub use manifest::{DataflipToml, Manifest, ParseContext};
pub use procedure::ProcedureDeclaration;
