//! Core domain types for the daily game
//!
//! Everything here is pure: no I/O, no clocks, no global randomness. The
//! reducer in particular is a plain function from `(Session, Action)` to the
//! next `Session`.

mod action;
mod feedback;
mod letter;
mod reducer;
mod session;

pub use action::{Action, ActionError};
pub use feedback::{DEFAULT_RANGE_THRESHOLD, Feedback};
pub use letter::{Letter, LetterError};
pub use reducer::transition;
pub use session::{Session, SessionData, Status, Theme};
