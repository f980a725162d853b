//! Actions for the counter.

use serde::{Deserialize, Serialize};

use crate::mvi::Action;

/// Actions that can be dispatched to the counter reducer.
///
/// Wire kinds are lowercase: `increment`, `decrement`, `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl Action for CounterAction {}
