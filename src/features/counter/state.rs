//! State for the counter.

use serde::{Deserialize, Serialize};

use crate::mvi::ReducerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

impl ReducerState for CounterState {}
