//! The reducer store.

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::mvi::{decode_action, ActionEnvelope, Reducer};

use super::middleware::Middleware;
use super::reporter::{panic_message, ErrorReporter, TracingReporter};
use super::subscription::{ListenerRegistry, Subscription};

/// Pending batches plus the single-dispatcher flag.
///
/// Each entry is applied as a unit and notifies listeners at most once.
struct DispatchQueue<A> {
    pending: VecDeque<Vec<A>>,
    draining: bool,
}

impl<A> DispatchQueue<A> {
    fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            draining: false,
        }
    }
}

/// Releases the dispatcher role if a reducer or middleware panics mid-drain,
/// so the store does not stay wedged in the draining state.
///
/// Batches queued by other callers stay pending and are applied by the next
/// dispatch.
struct DrainGuard<'a, A> {
    store: &'a str,
    queue: &'a Mutex<DispatchQueue<A>>,
}

impl<A> Drop for DrainGuard<'_, A> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut queue = self.queue.lock();
            queue.draining = false;
            if !queue.pending.is_empty() {
                tracing::error!(
                    store = %self.store,
                    pending = queue.pending.len(),
                    "Dispatch panicked; queued actions wait for the next dispatch"
                );
            }
        }
    }
}

/// Owner of one state value, serializing every transition through `R`.
///
/// Each feature creates its own store and hands it to consumers by
/// reference (or inside an `Arc`). There is no global instance.
///
/// # Dispatch
///
/// `dispatch` is synchronous. The action passes the middleware chain, the
/// reducer runs on a clone of the current state, and if the result differs
/// from the current state the slot is replaced and listeners are notified.
/// A dispatch issued while another one is in progress (from a listener, a
/// middleware hook or another thread) is queued and applied in order by the
/// active dispatcher.
pub struct Store<R: Reducer> {
    name: String,
    state: RwLock<Arc<R::State>>,
    listeners: Arc<Mutex<ListenerRegistry>>,
    middleware: Vec<Box<dyn Middleware<R>>>,
    queue: Mutex<DispatchQueue<R::Action>>,
    reporter: Arc<dyn ErrorReporter>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            name: "store".to_string(),
            state: RwLock::new(Arc::new(initial)),
            listeners: Arc::new(Mutex::new(ListenerRegistry::default())),
            middleware: Vec::new(),
            queue: Mutex::new(DispatchQueue::new()),
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Set the name used in log records.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a middleware. Middleware runs in the order it was added.
    pub fn with_middleware(mut self, middleware: impl Middleware<R> + 'static) -> Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Replace the collaborator that receives listener failures.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current state snapshot.
    ///
    /// The snapshot is shared and immutable. Its `Arc` identity changes
    /// exactly when a dispatch produced a different state.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.state.read())
    }

    /// Evaluate a selector against the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.get_state())
    }

    /// Register a listener, called with no arguments after every
    /// state-changing dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.listeners.lock().insert(Arc::new(listener));
        tracing::trace!(store = %self.name, listener = id, "Listener subscribed");
        Subscription::new(&self.listeners, id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Apply an action.
    pub fn dispatch(&self, action: R::Action) {
        self.enqueue(vec![action]);
    }

    /// Apply several actions, notifying listeners at most once.
    ///
    /// A batch issued while another dispatch is in progress is queued as one
    /// unit and still notifies at most once.
    pub fn dispatch_batch<I>(&self, actions: I)
    where
        I: IntoIterator<Item = R::Action>,
    {
        let actions: Vec<R::Action> = actions.into_iter().collect();
        if !actions.is_empty() {
            self.enqueue(actions);
        }
    }

    /// Decode and apply a string-keyed action.
    ///
    /// Unknown kinds and malformed payloads are no-ops. Returns whether the
    /// envelope decoded to an action.
    pub fn dispatch_envelope(&self, envelope: &ActionEnvelope) -> bool
    where
        R::Action: serde::de::DeserializeOwned,
    {
        match decode_action::<R::Action>(envelope) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => {
                tracing::debug!(store = %self.name, kind = %envelope.kind, "Ignoring unknown action");
                false
            }
        }
    }

    fn enqueue(&self, batch: Vec<R::Action>) {
        {
            let mut queue = self.queue.lock();
            queue.pending.push_back(batch);
            if queue.draining {
                tracing::trace!(store = %self.name, "Dispatch queued behind active dispatch");
                return;
            }
            queue.draining = true;
        }

        let _guard = DrainGuard {
            store: &self.name,
            queue: &self.queue,
        };
        self.drain();
    }

    fn drain(&self) {
        while let Some(batch) = self.next_queued() {
            let mut changed = false;
            for action in batch {
                changed |= self.apply(action);
            }
            if changed {
                self.notify();
            }
        }
    }

    fn next_queued(&self) -> Option<Vec<R::Action>> {
        let mut queue = self.queue.lock();
        let next = queue.pending.pop_front();
        if next.is_none() {
            queue.draining = false;
        }
        next
    }

    /// Run one action through middleware and the reducer.
    /// Returns true when the state slot was replaced.
    fn apply(&self, action: R::Action) -> bool {
        let current = self.get_state();

        for middleware in &self.middleware {
            if !middleware.before(&action, &current) {
                tracing::debug!(store = %self.name, "Action dropped by middleware");
                return false;
            }
        }

        let next = R::reduce(R::State::clone(&current), action);
        if next == *current {
            tracing::trace!(store = %self.name, "No-op transition");
            return false;
        }

        let next = Arc::new(next);
        *self.state.write() = Arc::clone(&next);

        for middleware in &self.middleware {
            middleware.after(&current, &next);
        }
        true
    }

    fn notify(&self) {
        // Snapshot first: listeners may subscribe, unsubscribe or dispatch.
        let listeners = self.listeners.lock().snapshot();
        for listener in listeners {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| (*listener)())) {
                let message = panic_message(&*payload);
                self.reporter.report_listener_panic(&self.name, &message);
            }
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.name)
            .field("state", &self.get_state())
            .field("listeners", &self.listener_count())
            .field("middleware", &self.middleware.len())
            .finish()
    }
}
