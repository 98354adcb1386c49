//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod generate;
mod output;
mod progress;

pub use check::{CheckReport, ContextSummary, ProcedureSummary};
pub use generate::{GenerateReport, GeneratedContext};
pub use output::{Output, Report, TerminalOutput};
pub use progress::TerminalProgress;
