//! Terminal progress observer.

use console::style;
use dataflip_codegen::pipeline::{ProgressEvent, ProgressSink};

/// Prints builder progress to stderr, headers in cyan and steps in green.
pub struct TerminalProgress;

impl ProgressSink for TerminalProgress {
    fn notify(&self, event: &ProgressEvent) {
        if event.is_header() {
            eprintln!("{}", style(event).cyan());
        } else {
            eprintln!("  {}", style(event).green());
        }
    }
}
