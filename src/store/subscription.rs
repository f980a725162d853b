//! Listener registry and subscription handles.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// A store listener. Listeners take no arguments and pull state through
/// [`Store::get_state`](super::Store::get_state).
pub type Listener = Arc<dyn Fn() + Send + Sync + 'static>;

/// Ordered list of listeners keyed by a monotonically increasing id.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl ListenerRegistry {
    pub(crate) fn insert(&mut self, listener: Listener) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Copy of the current listeners, in subscription order.
    ///
    /// Notification iterates the snapshot so listeners may subscribe or
    /// unsubscribe while being notified.
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

/// Handle returned by [`Store::subscribe`](super::Store::subscribe).
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`]
/// when the owning scope is torn down.
pub struct Subscription {
    registry: Weak<Mutex<ListenerRegistry>>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(registry: &Arc<Mutex<ListenerRegistry>>, id: u64) -> Self {
        Self {
            registry: Arc::downgrade(registry),
            id,
        }
    }

    /// Remove the listener from its store.
    ///
    /// Idempotent, and a no-op once the store is gone.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.lock().remove(self.id) {
                tracing::trace!(listener = self.id, "Listener unsubscribed");
            }
        }
    }

    /// Whether the listener is still registered with a live store.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| {
                registry
                    .lock()
                    .listeners
                    .iter()
                    .any(|(id, _)| *id == self.id)
            })
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Listener {
        Arc::new(|| {})
    }

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut registry = ListenerRegistry::default();
        let a = registry.insert(noop());
        let b = registry.insert(noop());
        assert!(b > a);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn remove_reports_whether_listener_existed() {
        let mut registry = ListenerRegistry::default();
        let id = registry.insert(noop());
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn unsubscribe_after_registry_dropped_is_noop() {
        let registry = Arc::new(Mutex::new(ListenerRegistry::default()));
        let id = registry.lock().insert(noop());
        let subscription = Subscription::new(&registry, id);
        drop(registry);
        subscription.unsubscribe();
        assert!(!subscription.is_active());
    }
}
