//! Language-specific abstractions.
//!
//! - [`Backend`] - Main trait for backend generators
//! - [`TypeMapper`] - Trait for mapping host types to language types
//! - [`Artifact`] - A rendered file, ready to preview or write

mod traits;

pub use traits::{Artifact, Backend, TypeMapper};
