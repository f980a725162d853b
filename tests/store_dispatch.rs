mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{cart_with, counting_listener, product, RecordingReporter};
use parking_lot::Mutex;
use serde_json::json;
use statelab::features::cart::{selectors, CartAction, CartReducer, CartState};
use statelab::features::counter::{CounterAction, CounterReducer, CounterState};
use statelab::features::todo::{TodoAction, TodoReducer};
use statelab::mvi::{ActionEnvelope, Reducer};
use statelab::selector::Memo;
use statelab::store::{Middleware, Store};

#[test]
fn dispatch_updates_state_and_notifies() {
    let store: Store<CounterReducer> = Store::default();
    let (count, listener) = counting_listener();
    store.subscribe(listener);

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    assert_eq!(*store.get_state(), CounterState { count: 3 });

    store.dispatch(CounterAction::Decrement);
    assert_eq!(store.get_state().count, 2);
    assert_eq!(count.load(Ordering::SeqCst), 4);
}

#[test]
fn unknown_envelope_keeps_identity_and_skips_listeners() {
    let store: Store<CartReducer> = Store::new(cart_with(1, "A", 10.0, 1));
    let (count, listener) = counting_listener();
    store.subscribe(listener);

    let before = store.get_state();
    let decoded = store.dispatch_envelope(&ActionEnvelope::new("__unknown__"));
    let after = store.get_state();

    assert!(!decoded);
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn malformed_payload_is_noop() {
    let store: Store<CartReducer> = Store::new(cart_with(1, "A", 10.0, 1));
    let before = store.get_state();

    // INCREMENT needs an id.
    assert!(!store.dispatch_envelope(&ActionEnvelope::new("INCREMENT")));
    assert!(!store.dispatch_envelope(&ActionEnvelope::with_payload("INCREMENT", json!("one"))));
    // Discounts outside the offered set do not decode.
    assert!(!store.dispatch_envelope(&ActionEnvelope::with_payload("APPLY_DISCOUNT", json!(15))));

    assert!(Arc::ptr_eq(&before, &store.get_state()));
}

#[test]
fn noop_transition_keeps_identity() {
    let store: Store<CartReducer> = Store::new(cart_with(1, "A", 10.0, 1));
    let (count, listener) = counting_listener();
    store.subscribe(listener);

    let before = store.get_state();
    store.dispatch(CartAction::Decrement(1));
    store.dispatch(CartAction::RemoveItem(404));

    assert!(Arc::ptr_eq(&before, &store.get_state()));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn changed_transition_replaces_identity() {
    let store: Store<CounterReducer> = Store::default();
    let before = store.get_state();
    store.dispatch(CounterAction::Increment);
    let after = store.get_state();

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.count, 0, "old snapshot must not be mutated");
}

#[test]
fn envelope_scenario_cart() {
    let store: Store<CartReducer> = Store::new(cart_with(1, "A", 10.0, 1));

    assert!(store.dispatch_envelope(&ActionEnvelope::with_payload(
        "ADD_ITEM",
        json!({"id": 1, "name": "A", "price": 10.0}),
    )));
    assert_eq!(store.get_state().items[0].quantity, 2);

    assert!(store.dispatch_envelope(&ActionEnvelope::with_payload("APPLY_DISCOUNT", json!(10))));
    assert_eq!(store.select(selectors::subtotal), 20.0);
    assert_eq!(store.select(selectors::total), 18.0);
}

#[test]
fn envelope_scenario_counter_lowercase_kinds() {
    let store: Store<CounterReducer> = Store::default();
    for _ in 0..3 {
        store.dispatch_envelope(&ActionEnvelope::new("increment"));
    }
    store.dispatch_envelope(&ActionEnvelope::new("decrement"));
    assert_eq!(store.get_state().count, 2);

    assert!(!store.dispatch_envelope(&ActionEnvelope::new("INCREMENT")));
}

#[test]
fn unsubscribe_stops_notifications() {
    let store: Store<CounterReducer> = Store::default();
    let (count, listener) = counting_listener();
    let subscription = store.subscribe(listener);

    store.dispatch(CounterAction::Increment);
    subscription.unsubscribe();
    subscription.unsubscribe();
    store.dispatch(CounterAction::Increment);

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!subscription.is_active());
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn listeners_run_in_subscription_order() {
    let store: Store<CounterReducer> = Store::default();
    let order = Arc::new(Mutex::new(Vec::new()));

    for name in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        store.subscribe(move || order.lock().push(name));
    }

    store.dispatch(CounterAction::Increment);
    assert_eq!(*order.lock(), vec!["first", "second", "third"]);
}

#[test]
fn panicking_listener_does_not_stop_fanout() {
    let reporter = Arc::new(RecordingReporter::default());
    let store: Store<CounterReducer> = Store::default()
        .named("counter")
        .with_reporter(reporter.clone());
    assert_eq!(store.name(), "counter");

    let (before, before_listener) = counting_listener();
    let (after, after_listener) = counting_listener();
    store.subscribe(before_listener);
    store.subscribe(|| panic!("listener exploded"));
    store.subscribe(after_listener);

    store.dispatch(CounterAction::Increment);

    assert_eq!(store.get_state().count, 1);
    assert_eq!(before.load(Ordering::SeqCst), 1);
    assert_eq!(after.load(Ordering::SeqCst), 1);

    let reports = reporter.reports.lock();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, "counter");
    assert!(reports[0].1.contains("listener exploded"));
}

#[test]
fn store_keeps_working_after_listener_panic() {
    let reporter = Arc::new(RecordingReporter::default());
    let store: Store<CounterReducer> = Store::default().with_reporter(reporter.clone());
    store.subscribe(|| panic!("always"));

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);

    assert_eq!(store.get_state().count, 2);
    assert_eq!(reporter.reports.lock().len(), 2);
}

#[test]
fn dispatch_from_listener_is_queued() {
    let store: Arc<Store<CounterReducer>> = Arc::new(Store::default());
    let seen = Arc::new(Mutex::new(Vec::new()));

    // First listener bumps the counter once more, the first time it sees 1.
    {
        let weak = Arc::downgrade(&store);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                if store.get_state().count == 1 {
                    store.dispatch(CounterAction::Increment);
                    // Queued: not applied until this notification pass ends.
                    assert_eq!(store.get_state().count, 1);
                }
            }
        });
    }
    {
        let weak = Arc::downgrade(&store);
        let seen = Arc::clone(&seen);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                seen.lock().push(store.get_state().count);
            }
        });
    }

    store.dispatch(CounterAction::Increment);

    assert_eq!(store.get_state().count, 2);
    assert_eq!(*seen.lock(), vec![1, 2]);
}

#[test]
fn dispatch_batch_notifies_once() {
    let store: Store<TodoReducer> = Store::default();
    let (count, listener) = counting_listener();
    store.subscribe(listener);

    store.dispatch_batch(vec![
        TodoAction::SetInput("a".to_string()),
        TodoAction::AddTodo,
        TodoAction::SetInput("b".to_string()),
        TodoAction::AddTodo,
    ]);

    assert_eq!(store.get_state().todos.len(), 2);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn dispatch_batch_of_noops_does_not_notify() {
    let store: Store<TodoReducer> = Store::default();
    let (count, listener) = counting_listener();
    store.subscribe(listener);

    store.dispatch_batch(vec![TodoAction::AddTodo, TodoAction::ToggleTodo(3)]);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

/// Rejects every action whose debug form contains a marker.
struct Blocklist(&'static str);

impl<R: Reducer> Middleware<R> for Blocklist {
    fn before(&self, action: &R::Action, _state: &R::State) -> bool {
        !format!("{:?}", action).contains(self.0)
    }
}

/// Records (prev, next) counts of every transition.
struct Recorder(Arc<Mutex<Vec<(i64, i64)>>>);

impl Middleware<CounterReducer> for Recorder {
    fn after(&self, prev: &CounterState, next: &CounterState) {
        self.0.lock().push((prev.count, next.count));
    }
}

#[test]
fn middleware_can_drop_actions() {
    let store: Store<CounterReducer> = Store::default().with_middleware(Blocklist("Decrement"));
    let (count, listener) = counting_listener();
    store.subscribe(listener);

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Decrement);

    assert_eq!(store.get_state().count, 1);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn middleware_after_sees_changed_transitions_only() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let store: Store<CounterReducer> = Store::default().with_middleware(Recorder(Arc::clone(&log)));

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Reset);
    store.dispatch(CounterAction::Reset);

    assert_eq!(*log.lock(), vec![(0, 1), (1, 0)]);
}

#[test]
fn memo_recomputes_once_per_snapshot() {
    let store: Store<CartReducer> = Store::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let total = {
        let calls = Arc::clone(&calls);
        Memo::new(move |state: &CartState| {
            calls.fetch_add(1, Ordering::SeqCst);
            selectors::total(state)
        })
    };

    assert_eq!(total.get(&store.get_state()), 0.0);
    assert_eq!(total.get(&store.get_state()), 0.0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // No-op dispatch keeps the snapshot, so the cache still hits.
    store.dispatch(CartAction::Increment(1));
    assert_eq!(total.get(&store.get_state()), 0.0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    store.dispatch(CartAction::AddItem(product(1, "A", 10.0)));
    assert_eq!(total.get(&store.get_state()), 10.0);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_dispatches_are_all_applied() {
    let store: Arc<Store<CounterReducer>> = Arc::new(Store::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..250 {
                    store.dispatch(CounterAction::Increment);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.get_state().count, 1000);
}

#[test]
fn batch_from_listener_notifies_once() {
    let store: Arc<Store<CounterReducer>> = Arc::new(Store::default());
    let (count, listener) = counting_listener();
    {
        let weak = Arc::downgrade(&store);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                if store.get_state().count == 1 {
                    store.dispatch_batch(vec![
                        CounterAction::Increment,
                        CounterAction::Increment,
                        CounterAction::Increment,
                    ]);
                }
            }
        });
    }
    store.subscribe(listener);

    store.dispatch(CounterAction::Increment);

    assert_eq!(store.get_state().count, 4);
    // One pass for the outer dispatch, one for the queued batch.
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

/// Panics on every `Decrement`.
struct PanicOnDecrement;

impl Middleware<CounterReducer> for PanicOnDecrement {
    fn before(&self, action: &CounterAction, _state: &CounterState) -> bool {
        if *action == CounterAction::Decrement {
            panic!("decrement rejected");
        }
        true
    }
}

#[test]
fn queued_actions_survive_a_panicking_dispatch() {
    let store: Arc<Store<CounterReducer>> =
        Arc::new(Store::default().with_middleware(PanicOnDecrement));
    {
        let weak = Arc::downgrade(&store);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                if store.get_state().count == 1 {
                    store.dispatch(CounterAction::Decrement);
                    store.dispatch(CounterAction::Increment);
                }
            }
        });
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        store.dispatch(CounterAction::Increment);
    }));
    assert!(result.is_err());
    assert_eq!(store.get_state().count, 1);

    // The next dispatch takes over and applies what was still queued.
    store.dispatch(CounterAction::Increment);
    assert_eq!(store.get_state().count, 3);
}
