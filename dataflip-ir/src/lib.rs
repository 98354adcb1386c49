//! Intermediate representation for Dataflip.
//!
//! The IR is the single, backend-agnostic description of every resolved
//! procedure in one configuration group.
//!
//! # Architecture
//!
//! ```text
//! dataflip.toml → Manifest → ContextBuilder (resolver) → Context (IR) → backends
//! ```
//!
//! A [`Context`] owns its [`Method`]s. Methods are validated on construction
//! so that every backend can trust the [`ReturnShape`] tag without
//! re-deriving it from field counts.

mod context;
mod error;
mod method;

pub use context::Context;
pub use error::Error;
pub use method::{Method, Parameter, ResultColumn, ReturnShape, ShapeKind};
