//! Model-View-Intent primitives shared by the form and the status line.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are the only place UI state changes. Side effects such as
//! clipboard writes stay in [`crate::ui::app::App`].

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
