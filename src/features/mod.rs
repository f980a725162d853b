//! Feature state machines.
//!
//! Each feature follows the same layout:
//! - `state.rs` - State value and its entities
//! - `action.rs` - Closed action vocabulary (the wire kinds live here)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `selectors.rs` - Derived values computed from state

pub mod cart;
pub mod counter;
pub mod todo;
pub mod user;
