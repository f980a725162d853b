//! # statelab
//!
//! Reducer stores: a pure `(state, action) -> state` function behind a
//! small dispatch/subscribe shell.
//!
//! - **Closed action vocabularies**: each feature's actions are one enum
//! - **Identity-based change detection**: state snapshots are `Arc`s that are
//!   replaced only when a dispatch produced a different value
//! - **Isolated listeners**: a panicking subscriber never stops the fan-out
//! - **Middleware**: logging and key-value persistence around dispatch
//! - **Memoized selectors**: derived values cached per snapshot
//!
//! ## Quick Start
//!
//! ```rust
//! use statelab::features::counter::{CounterAction, CounterReducer};
//! use statelab::store::Store;
//!
//! let store: Store<CounterReducer> = Store::default();
//! let subscription = store.subscribe(|| println!("counter changed"));
//!
//! store.dispatch(CounterAction::Increment);
//! store.dispatch(CounterAction::Increment);
//! assert_eq!(store.get_state().count, 2);
//!
//! subscription.unsubscribe();
//! ```
//!
//! ## Envelopes
//!
//! ```rust
//! use serde_json::json;
//! use statelab::features::cart::{selectors, CartReducer};
//! use statelab::mvi::ActionEnvelope;
//! use statelab::store::Store;
//!
//! let store: Store<CartReducer> = Store::default();
//! store.dispatch_envelope(&ActionEnvelope::with_payload(
//!     "ADD_ITEM",
//!     json!({"id": 1, "name": "A", "price": 10.0}),
//! ));
//! store.dispatch_envelope(&ActionEnvelope::with_payload("APPLY_DISCOUNT", json!(10)));
//!
//! // Unknown kinds are ignored.
//! assert!(!store.dispatch_envelope(&ActionEnvelope::new("__unknown__")));
//! assert_eq!(store.select(selectors::total), 9.0);
//! ```

pub mod cli;
pub mod config;
pub mod features;
pub mod logging;
pub mod mvi;
pub mod selector;
pub mod storage;
pub mod store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::mvi::{decode_action, Action, ActionEnvelope, Reducer, ReducerState};
    pub use crate::selector::Memo;
    pub use crate::storage::{hydrate, FileStorage, KeyValueStorage, MemoryStorage, StorageError};
    pub use crate::store::{
        ErrorReporter, LoggerMiddleware, Middleware, PersistMiddleware, Store, Subscription,
        TracingReporter,
    };
}
