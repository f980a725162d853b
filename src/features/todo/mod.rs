//! Todo list feature.
//!
//! New todos take their text from the input buffer and their id from a
//! counter kept in state, so `ADD_TODO` stays deterministic.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::TodoAction;
pub use reducer::TodoReducer;
pub use state::{Filter, InvalidFilter, Todo, TodoState};
