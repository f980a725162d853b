//! Reporting of listener failures.

use std::any::Any;

/// Collaborator that receives listener failures.
///
/// A failing listener never stops the notification fan-out; the store hands
/// the failure here and moves on to the next listener.
pub trait ErrorReporter: Send + Sync {
    fn report_listener_panic(&self, store: &str, message: &str);
}

/// Default reporter: logs through `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report_listener_panic(&self, store: &str, message: &str) {
        tracing::error!(store = %store, panic = %message, "Store listener panicked");
    }
}

/// Extract a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
