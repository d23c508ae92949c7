//! Command implementations

pub mod dispatch;
pub mod guess;
pub mod share;
pub mod simple;
pub mod stats;
pub mod theme;

pub use dispatch::dispatch_raw;
pub use guess::{GuessOutcome, guess_letter};
pub use share::share_to;
pub use simple::run_simple;
pub use stats::{StatsReport, stats_report};
pub use theme::apply_theme;
