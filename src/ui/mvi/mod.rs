//! Model-View-Intent (MVI) architecture primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of screen state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
