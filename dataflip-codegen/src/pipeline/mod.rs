//! From manifest to IR.
//!
//! [`ContextBuilder`] drives the schema resolver over every procedure of a
//! context group, in declaration order, and assembles the resulting
//! [`Context`](dataflip_ir::Context). Progress is reported to an injected
//! [`ProgressSink`].
//!
//! # Example
//!
//! ```ignore
//! let progress = |event: &ProgressEvent| eprintln!("{event}");
//! let builder = ContextBuilder::new(&connector).with_progress(&progress);
//! let context = builder.build(&manifest.contexts[0])?;
//! ```

mod connection;
mod context_builder;
mod error;
mod progress;

pub use connection::connection_string;
pub use context_builder::ContextBuilder;
pub use error::{Error, Result};
pub use progress::{NoProgress, ProgressBroadcast, ProgressEvent, ProgressSink};
