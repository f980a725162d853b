//! Reducer trait.

use super::action::Action;
use super::state::ReducerState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State. Reading a clock,
/// a random source or any I/O belongs to the caller or to middleware.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ReducerState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Actions that do not apply to the current state (unknown id, blank
    /// input) must return the state unchanged.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
