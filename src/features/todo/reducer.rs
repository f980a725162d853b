//! Reducer for the todo list.

use crate::mvi::Reducer;

use super::action::TodoAction;
use super::state::{Todo, TodoState};

/// Reducer for todo list state transitions.
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            TodoAction::SetInput(input_value) => TodoState {
                input_value,
                ..state
            },

            TodoAction::AddTodo => {
                if state.input_value.trim().is_empty() {
                    return state;
                }
                // Guard against stored states whose counter lags their ids.
                // Fails closed once the id space is exhausted.
                let ids = state
                    .todos
                    .iter()
                    .try_fold(state.next_id, |next, t| {
                        t.id.checked_add(1).map(|after| next.max(after))
                    })
                    .and_then(|id| id.checked_add(1).map(|next_id| (id, next_id)));
                let Some((id, next_id)) = ids else {
                    return state;
                };
                let mut todos = state.todos;
                todos.push(Todo {
                    id,
                    text: state.input_value,
                    completed: false,
                });
                TodoState {
                    todos,
                    input_value: String::new(),
                    next_id,
                    ..state
                }
            }

            TodoAction::ToggleTodo(id) => {
                let mut todos = state.todos;
                if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
                    todo.completed = !todo.completed;
                }
                TodoState { todos, ..state }
            }

            TodoAction::DeleteTodo(id) => {
                let mut todos = state.todos;
                todos.retain(|t| t.id != id);
                TodoState { todos, ..state }
            }

            TodoAction::SetFilter(filter) => TodoState { filter, ..state },

            TodoAction::ClearCompleted => {
                let mut todos = state.todos;
                todos.retain(|t| !t.completed);
                TodoState { todos, ..state }
            }
        }
    }
}
