//! Model-View-Intent (MVI) primitives for the view layer.
//!
//! ```text
//! key / fetch completion ──→ Intent ──→ Reducer ──→ State ──→ draw
//!          ↑                                                   │
//!          └───────────────────────────────────────────────────┘
//! ```
//!
//! Side effects (sending fetch commands, logging) live in `App`; reducers
//! only compute the next state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
