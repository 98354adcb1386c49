//! Client-side generators for Dataflip.
//!
//! Two backends share one type mapper:
//!
//! - [`TypingsGenerator`] - a TypeScript namespace with a `_Result` and a
//!   `_Parameters` class per method
//! - [`BindingsGenerator`] - Angular template scaffolding bound to the same
//!   fields
//!
//! Both take a casing flag that lower-cases the first character of every
//! field name.

mod bindings;
mod type_mapper;
mod typings;

pub use bindings::BindingsGenerator;
pub use dataflip_codegen::language::Backend;
pub use type_mapper::TypeScriptTypeMapper;
pub use typings::TypingsGenerator;
