//! Unidirectional data flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable value owned by exactly one store
//! - **Action**: Closed enum describing an intended transition
//! - **Reducer**: Pure function that maps (state, action) to the next state
//! - **Envelope**: String-keyed `{kind, payload}` form of an action

mod action;
mod envelope;
mod reducer;
mod state;

pub use action::Action;
pub use envelope::{decode_action, ActionEnvelope};
pub use reducer::Reducer;
pub use state::ReducerState;
