//! State for the todo list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mvi::ReducerState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Which todos the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid filter '{0}': expected all, active or completed")]
pub struct InvalidFilter(pub String);

impl Filter {
    /// Whether `todo` is visible under this filter.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for Filter {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(InvalidFilter(s.to_string())),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn first_id() -> u64 {
    1
}

/// Todo list state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub filter: Filter,
    #[serde(default)]
    pub input_value: String,
    /// Id handed to the next added todo.
    #[serde(default = "first_id")]
    pub next_id: u64,
}

impl Default for TodoState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            filter: Filter::All,
            input_value: String::new(),
            next_id: first_id(),
        }
    }
}

impl ReducerState for TodoState {}

impl TodoState {
    /// State seeded with existing todos; new ids continue past the largest.
    ///
    /// When the largest id is `u64::MAX` the id space is exhausted and
    /// `ADD_TODO` becomes a no-op.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(first_id(), |max| max.saturating_add(1));
        Self {
            todos,
            next_id,
            ..Self::default()
        }
    }
}
