//! Base trait for reducer-owned state.

use std::fmt::Debug;

/// Marker trait for state held by a [`Store`](crate::store::Store).
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq is how a store detects a no-op transition)
/// - Shareable (snapshots are handed out as `Arc<State>` across threads)
pub trait ReducerState: Clone + PartialEq + Default + Debug + Send + Sync + 'static {}
