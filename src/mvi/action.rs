//! Base trait for actions.

use std::fmt::Debug;

/// Marker trait for action vocabularies.
///
/// Each feature defines its actions as one closed enum, so every reducer
/// matches exhaustively. Actions are:
/// - User events (button clicks, text input)
/// - Commands from other code (CLI, tests)
///
/// `Debug` is required so middleware can log what was dispatched.
pub trait Action: Debug + Send + 'static {}
