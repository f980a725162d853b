//! Actions for the signed-in user.

use serde::{Deserialize, Serialize};

use crate::mvi::Action;

/// Actions that can be dispatched to the user reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAction {
    /// Sign in under a name.
    Login(String),
    Logout,
    /// Rename the signed-in user. No-op when signed out.
    UpdateName(String),
}

impl Action for UserAction {}
