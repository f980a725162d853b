//! Reducer for the counter.

use crate::mvi::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count.saturating_add(1),
            },
            CounterAction::Decrement => CounterState {
                count: state.count.saturating_sub(1),
            },
            CounterAction::Reset => CounterState::default(),
        }
    }
}
