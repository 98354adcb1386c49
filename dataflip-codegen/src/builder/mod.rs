//! Code generation building blocks.

mod code_writer;
mod indent;

pub use code_writer::{CodeWriter, EmitError};
pub use indent::Indent;
