//! Derived values for the todo list.

use super::state::{Todo, TodoState};

/// Todos that pass the current filter, in insertion order.
pub fn visible_todos(state: &TodoState) -> Vec<Todo> {
    state
        .todos
        .iter()
        .filter(|todo| state.filter.matches(todo))
        .cloned()
        .collect()
}

/// Number of todos not yet completed.
pub fn active_count(state: &TodoState) -> usize {
    state.todos.iter().filter(|todo| !todo.completed).count()
}

pub fn completed_count(state: &TodoState) -> usize {
    state.todos.len() - active_count(state)
}
