//! Reducer for the signed-in user.

use crate::mvi::Reducer;

use super::action::UserAction;
use super::state::{User, UserState};

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Action = UserAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            UserAction::Login(name) => UserState {
                user: Some(User { name }),
            },
            UserAction::Logout => UserState { user: None },
            UserAction::UpdateName(name) => match state.user {
                Some(_) => UserState {
                    user: Some(User { name }),
                },
                None => state,
            },
        }
    }
}
