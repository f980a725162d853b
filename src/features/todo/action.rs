//! Actions for the todo list.

use serde::{Deserialize, Serialize};

use crate::mvi::Action;

use super::state::Filter;

/// Actions that can be dispatched to the todo reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Replace the input buffer.
    SetInput(String),
    /// Turn the input buffer into a todo. No-op when the buffer is blank.
    AddTodo,
    ToggleTodo(u64),
    DeleteTodo(u64),
    SetFilter(Filter),
    /// Drop every completed todo.
    ClearCompleted,
}

impl Action for TodoAction {}
