//! Transient status line shown under the output.
//!
//! A message carries its own deadline. Showing a new message replaces the
//! deadline, which cancels the pending clear of the previous one.

mod intent;
mod reducer;
mod state;

pub use intent::StatusIntent;
pub use reducer::StatusReducer;
pub use state::{StatusKind, StatusLineState};
