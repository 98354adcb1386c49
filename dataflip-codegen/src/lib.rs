//! Shared code generation machinery for Dataflip.
//!
//! This crate turns a validated manifest into the canonical IR and provides
//! the building blocks every backend renders through.
//!
//! # Module Organization
//!
//! - [`builder`] - The indentation-tracking [`CodeWriter`](builder::CodeWriter)
//! - [`pipeline`] - [`ContextBuilder`](pipeline::ContextBuilder) and progress reporting
//! - [`language`] - The [`Backend`](language::Backend) and [`TypeMapper`](language::TypeMapper) traits

pub mod builder;
pub mod language;
pub mod pipeline;
