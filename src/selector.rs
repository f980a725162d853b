//! Selectors memoized by state identity.
//!
//! A selector is a pure `&State -> T` function. Stores hand out state as
//! `Arc<State>` and replace the `Arc` on every real transition, so the
//! pointer is a cheap and exact cache key. The cache holds the `Arc` it was
//! computed from, which keeps the address from being reused by a later state.

use std::sync::Arc;

use parking_lot::Mutex;

type SelectorFn<S, T> = Box<dyn Fn(&S) -> T + Send + Sync>;

/// A selector that recomputes only when the state snapshot changes.
pub struct Memo<S, T> {
    selector: SelectorFn<S, T>,
    cache: Mutex<Option<(Arc<S>, T)>>,
}

impl<S, T: Clone> Memo<S, T> {
    pub fn new<F>(selector: F) -> Self
    where
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        Self {
            selector: Box::new(selector),
            cache: Mutex::new(None),
        }
    }

    /// Selected value for `state`, computed at most once per snapshot.
    pub fn get(&self, state: &Arc<S>) -> T {
        let mut cache = self.cache.lock();
        if let Some((key, value)) = cache.as_ref() {
            if Arc::ptr_eq(key, state) {
                return value.clone();
            }
        }

        let value = (self.selector)(state);
        *cache = Some((Arc::clone(state), value.clone()));
        value
    }

    /// Drop the cached value (and the state it pins).
    pub fn invalidate(&self) {
        *self.cache.lock() = None;
    }
}

impl<S, T> std::fmt::Debug for Memo<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("cached", &self.cache.lock().is_some())
            .finish()
    }
}
