//! State for the signed-in user.

use serde::{Deserialize, Serialize};

use crate::mvi::ReducerState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserState {
    pub user: Option<User>,
}

impl ReducerState for UserState {}

impl UserState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name of the signed-in user, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
