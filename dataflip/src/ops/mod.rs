//! Core operations.
//!
//! This module contains the business logic for dataflip commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod init;

pub use check::check;
pub use generate::{build_context, render_artifacts};
pub use init::STARTER_MANIFEST;
