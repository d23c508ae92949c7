//! Terminal output formatting
//!
//! Display utilities for CLI results, plus the sinks share text is exported to.

pub mod display;
pub mod export;
pub mod formatters;

pub use display::{print_board, print_guess_result, print_statistics, print_status};
pub use export::{ExportSink, FileSink, Osc52Sink, StdoutSink};
