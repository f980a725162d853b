//! Signed-in user feature.

mod action;
mod reducer;
mod state;

pub use action::UserAction;
pub use reducer::UserReducer;
pub use state::{User, UserState};
