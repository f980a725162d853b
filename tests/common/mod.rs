//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use statelab::features::cart::{CartItem, CartState, Product};
use statelab::store::ErrorReporter;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Product with the given id, name and price.
pub fn product(id: u64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
    }
}

/// Cart holding a single line.
pub fn cart_with(id: u64, name: &str, price: f64, quantity: u32) -> CartState {
    CartState {
        items: vec![CartItem {
            id,
            name: name.to_string(),
            price,
            quantity,
        }],
        ..CartState::default()
    }
}

/// Listener counter: returns the shared count and a listener bumping it.
pub fn counting_listener() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let listener = {
        let count = Arc::clone(&count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    };
    (count, listener)
}

/// Reporter that records every listener failure.
#[derive(Default)]
pub struct RecordingReporter {
    pub reports: Mutex<Vec<(String, String)>>,
}

impl ErrorReporter for RecordingReporter {
    fn report_listener_panic(&self, store: &str, message: &str) {
        self.reports
            .lock()
            .push((store.to_string(), message.to_string()));
    }
}
