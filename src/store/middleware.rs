//! Middleware wrapped around the dispatch path.
//!
//! Middleware sees every action before it reaches the reducer and every
//! transition after the state slot has been replaced. Side effects such as
//! logging and persistence live here so reducers stay pure.

use std::sync::Arc;

use serde::Serialize;

use crate::mvi::Reducer;
use crate::storage::KeyValueStorage;

/// Hook into a store's dispatch path.
pub trait Middleware<R: Reducer>: Send + Sync {
    /// Called before the reducer runs.
    ///
    /// Returning `false` drops the action: the reducer is not invoked and
    /// no listener is notified.
    fn before(&self, _action: &R::Action, _state: &R::State) -> bool {
        true
    }

    /// Called after a transition that produced a different state.
    fn after(&self, _prev: &R::State, _next: &R::State) {}
}

/// Logs dispatched actions and resulting transitions.
#[derive(Debug, Clone)]
pub struct LoggerMiddleware {
    name: String,
}

impl LoggerMiddleware {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R: Reducer> Middleware<R> for LoggerMiddleware {
    fn before(&self, action: &R::Action, _state: &R::State) -> bool {
        tracing::debug!(store = %self.name, action = ?action, "Dispatching action");
        true
    }

    fn after(&self, prev: &R::State, next: &R::State) {
        tracing::trace!(store = %self.name, prev = ?prev, next = ?next, "State transition");
    }
}

/// Writes each new state to a key-value storage as JSON.
///
/// Runs only after state-changing dispatches. Storage failures are logged
/// and swallowed; the in-memory transition has already happened.
pub struct PersistMiddleware {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl PersistMiddleware {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl<R> Middleware<R> for PersistMiddleware
where
    R: Reducer,
    R::State: Serialize,
{
    fn after(&self, _prev: &R::State, next: &R::State) {
        let json = match serde_json::to_string(next) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Failed to serialize state");
                return;
            }
        };

        if let Err(err) = self.storage.set(&self.key, &json) {
            tracing::warn!(key = %self.key, error = %err, "Failed to persist state");
        }
    }
}

impl std::fmt::Debug for PersistMiddleware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistMiddleware")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
